//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or saving scroll options
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed into options
    #[error("Failed to parse scroll options: {0}")]
    Parse(#[from] toml::de::Error),

    /// The options could not be written out as TOML
    #[error("Failed to serialize scroll options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
