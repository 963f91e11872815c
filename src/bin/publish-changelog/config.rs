use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use changelog_publisher::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from)) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

/// An explicit path must exist. Otherwise the first file found wins, or defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        return Ok(Config::default());
    };

    let config = read_config(&config_path)
        .with_context(|| format!("Could not load configuration from {}", config_path.display()))?;

    Ok(config)
}
