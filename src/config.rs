//! Configuration management for Address Bloc.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Every variable is optional.

use crate::error::{ConfigError, ConfigResult};
use crate::importer::ImportOptions;
use std::env;

/// Configuration for importing and logging.
#[derive(Debug, Clone)]
pub struct Config {
    /// Field delimiter for CSV imports (default: ',')
    pub csv_delimiter: u8,

    /// Whether CSV sources start with a header row (default: false)
    pub csv_has_headers: bool,

    /// Trim whitespace around CSV fields (default: true)
    pub csv_trim: bool,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BLOC_CSV_DELIMITER`: single ASCII character (default: ",")
    /// - `ADDRESS_BLOC_CSV_HAS_HEADERS`: "true" or "false" (default: false)
    /// - `ADDRESS_BLOC_CSV_TRIM`: "true" or "false" (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let csv_delimiter = Self::parse_env_delimiter("ADDRESS_BLOC_CSV_DELIMITER", b',')?;
        let csv_has_headers = Self::parse_env_bool("ADDRESS_BLOC_CSV_HAS_HEADERS", false)?;
        let csv_trim = Self::parse_env_bool("ADDRESS_BLOC_CSV_TRIM", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            csv_delimiter,
            csv_has_headers,
            csv_trim,
            log_level,
        })
    }

    /// Importer settings derived from this configuration.
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            delimiter: self.csv_delimiter,
            has_headers: self.csv_has_headers,
            trim: self.csv_trim,
        }
    }

    /// Parse an environment variable as a single-byte delimiter.
    fn parse_env_delimiter(var_name: &str, default: u8) -> ConfigResult<u8> {
        let val = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => return Ok(default),
        };

        match val.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' => Ok(*byte),
            _ => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!(
                    "Must be a single ASCII character other than a quote or newline, got: {:?}",
                    val
                ),
            }),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_delimiter: b',',
            csv_has_headers: false,
            csv_trim: true,
            log_level: "warn".to_string(),
        }
    }
}
