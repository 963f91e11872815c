use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PublishError>;

#[derive(Debug, Error)]
pub enum PublishError {
    /// An external command exited with a non-zero status
    #[error("Command `{command}` failed with status {}: {stderr}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PublishError {
    /// Process exit code to report for this error.
    /// Command failures propagate the child's code, everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}
