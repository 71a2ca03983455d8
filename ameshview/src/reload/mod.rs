//! The reload cycle: three ordered fetch+decode stages plus compositing.
//!
//! A reload is all-or-nothing: any stage failure aborts the remaining
//! stages, discards partial results, and surfaces a [`ReloadError`] naming
//! the stage. The previously published output stays untouched.

mod chain;
mod types;

pub use chain::ReloadChain;
pub use types::{CompositeOutput, ReloadError, ReloadPhase, ReloadState, Stage};
