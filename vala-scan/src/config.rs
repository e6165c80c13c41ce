//! Configuration module for the vala-scan CLI.
//!
//! Settings come from an optional `vala-scan.toml`. Command-line flags are
//! applied on top in `main`.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use vala_lex::ScanOptions;

use crate::error::{Result, ScanToolError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "vala-scan.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner classification settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Token printing settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScannerConfig {
    /// Treat carriage return as whitespace.
    #[serde(default)]
    pub crlf_whitespace: bool,
}

impl ScannerConfig {
    /// Converts to the scanner's option struct.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            crlf_whitespace: self.crlf_whitespace,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// How each token is printed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print whitespace tokens as well.
    #[serde(default)]
    pub show_whitespace: bool,
}

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Token{kind: CLASS, literal: class}`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanToolError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Arguments
    /// * `content` - TOML document text
    ///
    /// # Returns
    /// * `Result<Config>` - The parsed configuration or a `Config` error
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ScanToolError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("vala-scan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("vala-scan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
