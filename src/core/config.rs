// src/core/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use tracing::info;

use super::config_loader::user_config_path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub battery: BatteryConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BatteryConfig {
    // Named entry under /sys/class/power_supply, e.g. "BAT0".
    // When unset, the first `type == Battery` entry found is used.
    #[serde(default)]
    pub device: Option<String>,
}

impl Config {
    // Loads the user config, falling back to defaults when absent.
    // Thresholds and intervals are deliberately not configurable.
    pub fn load() -> Result<Self> {
        let path = user_config_path();
        if !path.exists() {
            info!(path = ?path, "No user config found; using defaults");
            return Ok(Config::default());
        }

        info!(path = ?path, "Reading user config");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Reading user config at {path:?}"))?;
        let cfg: Config = toml::from_str(&raw).context("Parsing user config")?;

        info!(?cfg, "Configuration loaded successfully");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parse_device_override() {
        let cfg: Config = toml::from_str("[battery]\ndevice = \"BAT1\"\n").unwrap();
        assert_eq!(cfg.battery.device.as_deref(), Some("BAT1"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.battery.device.is_none());
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let cfg: Config = toml::from_str("[window]\nheight = 32\n").unwrap();
        assert!(cfg.battery.device.is_none());
    }
}
