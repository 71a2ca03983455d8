//! Application assembly: configuration, bootstrap, and top-level errors.

mod bootstrap;
mod config;
mod error;

pub use bootstrap::build_service;
pub use config::{AmeshConfig, DEFAULT_HTTP_TIMEOUT_SECS};
pub use error::AppError;
