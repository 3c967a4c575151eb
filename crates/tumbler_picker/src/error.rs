//! Picker error types

use thiserror::Error;

/// Errors from picker configuration and field parsing
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Failed to parse picker options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize picker options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown field '{0}', expected year, month or day")]
    UnknownField(String),
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
