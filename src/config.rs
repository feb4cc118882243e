// Configuration module for parallax
// This module handles loading and parsing configuration from ~/.config/parallax/config.toml

mod types;

pub use types::{AnimationSection, Config, CurveConfig, HeaderSection, ScrollSection};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/parallax/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(mut config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed successfully: header height {}, {} units per row",
                config.header.height,
                config.scroll.units_per_row
            );
            let warning = reset_invalid_scale(&mut config);
            ConfigResult { config, warning }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

/// Swap a row scale no layout can use for the default, reporting the swap
fn reset_invalid_scale(config: &mut Config) -> Option<String> {
    let units_per_row = config.scroll.units_per_row;
    if units_per_row.is_finite() && units_per_row > 0.0 {
        return None;
    }

    #[cfg(debug_assertions)]
    log::warn!("Ignoring scroll.units_per_row = {}", units_per_row);

    config.scroll.units_per_row = ScrollSection::default().units_per_row;
    Some(format!(
        "Invalid config: scroll.units_per_row must be positive, got {}",
        units_per_row
    ))
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/parallax/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("parallax")
        .join("config.toml")
}
