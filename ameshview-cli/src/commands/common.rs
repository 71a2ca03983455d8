//! Shared plumbing for CLI commands.

use std::fmt;
use std::path::Path;

use ameshview::{AppError, CompositeOutput, ReloadError};

/// Errors surfaced by a CLI command.
#[derive(Debug)]
pub enum CommandError {
    /// Application assembly failed (config, client, runtime).
    App(AppError),

    /// The reload cycle failed.
    Reload(ReloadError),

    /// The composite could not be written to disk.
    Save(image::ImageError),

    /// The Ctrl-C handler could not be installed.
    Signal(ctrlc::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::App(e) => write!(f, "{}", e),
            CommandError::Reload(e) => write!(f, "Reload failed: {}", e),
            CommandError::Save(e) => write!(f, "Failed to write composite: {}", e),
            CommandError::Signal(e) => write!(f, "Failed to install signal handler: {}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::App(e) => Some(e),
            CommandError::Reload(e) => Some(e),
            CommandError::Save(e) => Some(e),
            CommandError::Signal(e) => Some(e),
        }
    }
}

impl From<AppError> for CommandError {
    fn from(e: AppError) -> Self {
        CommandError::App(e)
    }
}

impl From<ReloadError> for CommandError {
    fn from(e: ReloadError) -> Self {
        CommandError::Reload(e)
    }
}

impl From<image::ImageError> for CommandError {
    fn from(e: image::ImageError) -> Self {
        CommandError::Save(e)
    }
}

impl From<ctrlc::Error> for CommandError {
    fn from(e: ctrlc::Error) -> Self {
        CommandError::Signal(e)
    }
}

/// Creates the Tokio runtime the commands run on.
pub fn build_runtime() -> Result<tokio::runtime::Runtime, CommandError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CommandError::App(AppError::RuntimeCreation(e.to_string())))
}

/// Writes the composite raster as a PNG file.
pub fn save_composite(output: &CompositeOutput, path: &Path) -> Result<(), image::ImageError> {
    output.raster.to_rgba_image().save(path)
}
