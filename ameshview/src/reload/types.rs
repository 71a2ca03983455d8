//! Reload cycle types and errors.

use std::fmt;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::composite::CompositeError;
use crate::decode::DecodeError;
use crate::provider::ProviderError;
use crate::raster::Raster;

/// One step within the reload chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Map,
    Border,
    Radar,
    Composite,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Map => write!(f, "base map"),
            Stage::Border => write!(f, "prefectural border"),
            Stage::Radar => write!(f, "radar frame"),
            Stage::Composite => write!(f, "composite"),
        }
    }
}

/// Where a chain currently is within a cycle.
///
/// `Idle` whenever no cycle is in flight, including right after a failed
/// one; cycle completion itself is reported through the `Result` returned
/// by [`ReloadChain::reload`](super::ReloadChain::reload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPhase {
    Idle,
    FetchingMap,
    FetchingBorder,
    FetchingRadar,
    Compositing,
}

impl fmt::Display for ReloadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadPhase::Idle => write!(f, "idle"),
            ReloadPhase::FetchingMap => write!(f, "fetching base map"),
            ReloadPhase::FetchingBorder => write!(f, "fetching prefectural border"),
            ReloadPhase::FetchingRadar => write!(f, "fetching radar frame"),
            ReloadPhase::Compositing => write!(f, "compositing"),
        }
    }
}

/// Errors that abort a reload cycle.
///
/// Every stage-level failure is wrapped here; nothing propagates out of the
/// chain in any other shape.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The transport failed before a payload arrived.
    #[error("{stage} fetch failed: {source}")]
    Transport {
        stage: Stage,
        source: ProviderError,
    },

    /// The payload arrived but did not decode.
    #[error("{stage} decode failed: {source}")]
    Decode { stage: Stage, source: DecodeError },

    /// The decoded layers could not be merged.
    #[error("composite failed: {0}")]
    Composite(#[from] CompositeError),
}

impl ReloadError {
    /// The stage that aborted the cycle.
    pub fn stage(&self) -> Stage {
        match self {
            ReloadError::Transport { stage, .. } => *stage,
            ReloadError::Decode { stage, .. } => *stage,
            ReloadError::Composite(_) => Stage::Composite,
        }
    }
}

/// Bookkeeping updated only when a cycle completes successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadState {
    /// When the last successful cycle finished.
    pub last_success: Option<NaiveDateTime>,
    /// The radar filename that cycle resolved.
    pub filename: Option<String>,
}

/// The merged raster plus the radar filename that produced it.
///
/// Replaced wholesale on each successful cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeOutput {
    pub raster: Raster,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Map.to_string(), "base map");
        assert_eq!(Stage::Radar.to_string(), "radar frame");
    }

    #[test]
    fn test_error_stage_attribution() {
        let err = ReloadError::Transport {
            stage: Stage::Border,
            source: ProviderError::Http("timeout".to_string()),
        };
        assert_eq!(err.stage(), Stage::Border);
        assert!(err.to_string().contains("prefectural border"));

        let err = ReloadError::Composite(CompositeError::DimensionMismatch {
            map_w: 1,
            map_h: 1,
            border_w: 2,
            border_h: 1,
            radar_w: 1,
            radar_h: 1,
        });
        assert_eq!(err.stage(), Stage::Composite);
    }

    #[test]
    fn test_reload_state_default_is_empty() {
        let state = ReloadState::default();
        assert!(state.last_success.is_none());
        assert!(state.filename.is_none());
    }
}
