//! CLI subcommand implementations.

mod common;
pub mod fetch;
pub mod watch;

pub use common::CommandError;
pub use fetch::FetchArgs;
pub use watch::WatchArgs;
