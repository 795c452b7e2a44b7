//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when converting image payloads
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("Failed to encode image as PNG: {0}")]
    Encode(String),

    #[error("Failed to decode image payload: {0}")]
    Decode(String),

    #[error("Image content is not a PNG data URL")]
    InvalidDataUrl,

    #[error("Image buffer of {len} bytes does not match {width}x{height} RGBA")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}
