//! Configuration management for planetcat.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the platform config directory.
const APP_DIR_NAME: &str = "planetcat";

/// Largest number of decimal places the display layer accepts.
const MAX_PRECISION: usize = 10;

/// Largest number of records either store may be configured to hold.
const MAX_CAPACITY: usize = 1_000_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PLANETCAT_`)
/// 2. TOML config file at `~/.config/planetcat/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalogue capacities and field limits.
    pub catalogue: CatalogueConfig,
    /// Console display settings.
    pub display: DisplayConfig,
}

/// Catalogue-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Maximum number of planets the catalogue holds.
    pub max_planets: usize,
    /// Maximum number of researchers the catalogue holds.
    pub max_researchers: usize,
    /// Maximum characters kept for names, planet types and emails.
    pub max_name_length: usize,
    /// Maximum characters kept for planet descriptions.
    pub max_description_length: usize,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places used when printing sizes, distances and periods.
    pub precision: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            max_planets: 100,
            max_researchers: 50,
            max_name_length: 49,
            max_description_length: 199,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `PLANETCAT_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::from_figment(Self::figment(&config_file))
    }

    /// Build the layered figment for the given config file.
    fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("PLANETCAT_").split("__"))
    }

    /// Extract and validate a configuration from a prepared figment.
    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Render the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let catalogue = &self.catalogue;
        let limits = [
            ("max_planets", catalogue.max_planets),
            ("max_researchers", catalogue.max_researchers),
            ("max_name_length", catalogue.max_name_length),
            ("max_description_length", catalogue.max_description_length),
        ];
        for (key, value) in limits {
            if value == 0 {
                return Err(Error::config_validation(format!(
                    "{key} must be greater than 0"
                )));
            }
        }

        let capacities = [
            ("max_planets", catalogue.max_planets),
            ("max_researchers", catalogue.max_researchers),
        ];
        for (key, value) in capacities {
            if value > MAX_CAPACITY {
                return Err(Error::config_validation(format!(
                    "{key} ({value}) cannot be greater than {MAX_CAPACITY}"
                )));
            }
        }

        if self.display.precision > MAX_PRECISION {
            return Err(Error::config_validation(format!(
                "precision ({}) cannot be greater than {MAX_PRECISION}",
                self.display.precision
            )));
        }

        Ok(())
    }
}
