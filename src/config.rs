use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Git {
    /// Executable used for every git operation
    pub program: String,
    pub remote: String,
    pub branch: String,
}

impl Default for Git {
    fn default() -> Self {
        Git {
            program: "git".to_string(),
            remote: "origin".to_string(),
            branch: "master".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PostSettings {
    /// Relative to the repository root. Must already exist in the clone.
    pub posts_dir: PathBuf,
    pub title_prefix: String,
    pub category: String,
}

impl Default for PostSettings {
    fn default() -> Self {
        PostSettings {
            posts_dir: PathBuf::from("_posts"),
            title_prefix: "Spinnaker Changelog".to_string(),
            category: "changelogs".to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::Info,
            log_to_console: true,
            location: None,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    #[serde(default)]
    pub git: Git,
    #[serde(default)]
    pub post: PostSettings,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let Ok(cur_exe) = env::current_exe() else {
            return path;
        };
        let Some(exe_dir) = cur_exe.parent() else {
            return path;
        };
        let str_path = path.to_string_lossy();
        PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy()))
    } else {
        path
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
