// Rust guideline compliant 2026-10-19

//! Configuration management for csvmerge.

use crate::table_io::TableOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "csvmerge.toml";

/// Output format for run summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
}

/// Configuration for csvmerge behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Field delimiter for input and output files.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// File extension used to discover candidate inputs (without the dot).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory where output and unmatched files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether rows must have exactly as many fields as the header.
    #[serde(default)]
    pub strict_width: bool,

    /// Log level for diagnostics (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format for run summaries.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_delimiter() -> char {
    ','
}

fn default_extension() -> String {
    "csv".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            extension: default_extension(),
            output_dir: default_output_dir(),
            strict_width: false,
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `config_path`, if it exists
    /// 3. Environment variables with `CSVMERGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", config_path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CSVMERGE_DELIMITER` - Single-character field delimiter
    /// - `CSVMERGE_EXTENSION` - Candidate file extension
    /// - `CSVMERGE_OUTPUT_DIR` - Output directory
    /// - `CSVMERGE_STRICT_WIDTH` - Enforce row width (true/false)
    /// - `CSVMERGE_LOG_LEVEL` - Log level
    /// - `CSVMERGE_OUTPUT_FORMAT` - Summary format (json/table)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CSVMERGE_DELIMITER") {
            self.delimiter = parse_delimiter(&val)?;
        }

        if let Ok(val) = std::env::var("CSVMERGE_EXTENSION") {
            self.extension = val;
        }

        if let Ok(val) = std::env::var("CSVMERGE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("CSVMERGE_STRICT_WIDTH") {
            self.strict_width = val.parse().map_err(|_| {
                Error::Config("CSVMERGE_STRICT_WIDTH must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("CSVMERGE_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("CSVMERGE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                _ => {
                    return Err(Error::Config(
                        "CSVMERGE_OUTPUT_FORMAT must be json or table".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - delimiter is not a single-byte ASCII character or is a quote/newline
    /// - extension is empty
    /// - log_level is not one of error, warn, info, debug
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(Error::Config(format!(
                "delimiter must be a single ASCII character other than a quote or newline, got {:?}",
                self.delimiter
            )));
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::Config("extension must not be empty".to_string()));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug"
        ) {
            return Err(Error::Config(format!(
                "log_level must be error, warn, info, or debug, got {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns reader/writer options derived from this configuration.
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            delimiter: self.delimiter as u8,
            strict_width: self.strict_width,
        }
    }

    /// Returns the extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Parses a delimiter given as a single character or the word `tab`.
///
/// # Errors
///
/// Returns `Error::Config` if the value is not exactly one character.
pub fn parse_delimiter(value: &str) -> Result<char> {
    if value.eq_ignore_ascii_case("tab") || value == "\\t" {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Config(format!(
            "delimiter must be a single character, got {:?}",
            value
        ))),
    }
}
