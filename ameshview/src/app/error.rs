//! Application error types.

use std::fmt;

use crate::provider::ProviderError;

/// Errors that can occur while assembling the application.
#[derive(Debug)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    Config(String),

    /// Failed to construct the HTTP client.
    ClientCreation(ProviderError),

    /// Failed to create the Tokio runtime.
    RuntimeCreation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AppError::ClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
            AppError::RuntimeCreation(msg) => {
                write!(f, "Failed to create Tokio runtime: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::ClientCreation(e) => Some(e),
            AppError::Config(_) | AppError::RuntimeCreation(_) => None,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::ClientCreation(e)
    }
}
