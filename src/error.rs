//! Error types and handling for `RideCast`

use thiserror::Error;

/// Main error type for the `RideCast` library
#[derive(Error, Debug)]
pub enum RideCastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Forecast payload could not be decoded
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RideCastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RideCastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            RideCastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            RideCastError::Parse { .. } => {
                "The forecast data could not be read.".to_string()
            }
            RideCastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
