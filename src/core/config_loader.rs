// src/core/config_loader.rs

use directories::BaseDirs;
use std::path::PathBuf;

// User config lives in XDG_CONFIG_HOME/batnotify/config.toml
pub fn user_config_path() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().join("batnotify").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config/config.toml"))
}
