use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use std::process::Command;

use spdlog::debug;

use crate::error::{PublishError, Result};

/// A program invocation with its arguments.
/// Arguments are passed to the process as-is, no shell is involved.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: &str) -> Self {
        ShellCommand {
            program: program.to_string(),
            args: vec![],
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Runs the command inside `dir` (`git -C <dir>`)
    pub fn in_dir(self, dir: &Path) -> Self {
        self.arg("-C").arg(dir.to_string_lossy())
    }
}

impl Display for ShellCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

pub struct CommandOutput {
    /// None when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Runs the command to completion. Errors only if it could not be started.
    fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput>;
}

/// Spawns real processes and waits for them, capturing their output.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Runs `command` and turns a non-zero exit into [`PublishError::CommandFailed`].
pub fn check_run(runner: &dyn CommandRunner, command: &ShellCommand) -> Result<CommandOutput> {
    debug!("Running {}", command);
    let output = runner.run(command)?;

    if !output.stdout.trim().is_empty() {
        debug!("{}", output.stdout.trim_end());
    }
    if !output.stderr.trim().is_empty() {
        debug!("{}", output.stderr.trim_end());
    }

    if !output.success() {
        debug!("{} exited with {:?}", command, output.code);
        return Err(PublishError::CommandFailed {
            command: command.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(output)
}
