//! Domain error types

use thiserror::Error;

/// Error when an uploaded file is not a recognized audio recording
#[derive(Debug, Clone, Error)]
#[error("\"{file_name}\" is not a supported audio file. Please upload a valid audio recording (MP3, WAV, M4A, OGG, FLAC)")]
pub struct ValidationError {
    pub file_name: String,
}

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
