//! The three-stage download chain.

use bytes::Bytes;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::composite;
use crate::decode::{self, DecodeError};
use crate::frames;
use crate::provider::{Endpoints, HttpClient};
use crate::raster::Raster;

use super::{CompositeOutput, ReloadError, ReloadPhase, ReloadState, Stage};

/// Orchestrates one reload cycle: map, then border, then radar, then
/// composite.
///
/// The stages are strictly sequential: later fetches are never issued
/// while an earlier one is outstanding, and a failure stops the chain
/// before the next stage starts. `reload` takes `&mut self`, so a chain
/// can only ever have one cycle in flight.
pub struct ReloadChain<C: HttpClient> {
    client: C,
    endpoints: Endpoints,
    phase: ReloadPhase,
    state: ReloadState,
}

impl<C: HttpClient> ReloadChain<C> {
    pub fn new(client: C, endpoints: Endpoints) -> Self {
        Self {
            client,
            endpoints,
            phase: ReloadPhase::Idle,
            state: ReloadState::default(),
        }
    }

    /// Current position within a cycle; `Idle` between cycles.
    pub fn phase(&self) -> ReloadPhase {
        self.phase
    }

    /// Bookkeeping from the last successful cycle.
    pub fn state(&self) -> &ReloadState {
        &self.state
    }

    /// Runs one full reload cycle resolved against `now`.
    ///
    /// On success the returned output carries the merged raster and the
    /// radar filename, and [`state`](Self::state) is updated. On failure
    /// nothing is retained from the aborted cycle and the error names the
    /// failing stage.
    pub async fn reload(&mut self, now: NaiveDateTime) -> Result<CompositeOutput, ReloadError> {
        let result = self.run_cycle(now).await;
        self.set_phase(ReloadPhase::Idle);

        if let Ok(output) = &result {
            self.state.last_success = Some(now);
            self.state.filename = Some(output.filename.clone());
        }
        result
    }

    async fn run_cycle(&mut self, now: NaiveDateTime) -> Result<CompositeOutput, ReloadError> {
        self.set_phase(ReloadPhase::FetchingMap);
        let url = self.endpoints.map_url().to_owned();
        let payload = self.fetch(Stage::Map, &url).await?;
        let map = decode_still(Stage::Map, &payload)?;

        self.set_phase(ReloadPhase::FetchingBorder);
        let url = self.endpoints.border_url().to_owned();
        let payload = self.fetch(Stage::Border, &url).await?;
        let border = decode_still(Stage::Border, &payload)?;

        self.set_phase(ReloadPhase::FetchingRadar);
        let filename = frames::radar_filename(now);
        let url = self.endpoints.radar_url(&filename);
        let payload = self.fetch(Stage::Radar, &url).await?;
        let radar = decode_radar(&payload)?;

        self.set_phase(ReloadPhase::Compositing);
        let raster = composite::composite(&map, &border, &radar)?;
        info!(
            filename = %filename,
            width = raster.width(),
            height = raster.height(),
            "reload cycle complete"
        );

        Ok(CompositeOutput { raster, filename })
    }

    async fn fetch(&self, stage: Stage, url: &str) -> Result<Bytes, ReloadError> {
        debug!(stage = %stage, url, "fetching");
        self.client
            .get(url)
            .await
            .map_err(|source| ReloadError::Transport { stage, source })
    }

    fn set_phase(&mut self, phase: ReloadPhase) {
        if self.phase != phase {
            debug!(from = %self.phase, to = %phase, "reload phase");
            self.phase = phase;
        }
    }
}

fn decode_still(stage: Stage, payload: &[u8]) -> Result<Raster, ReloadError> {
    decode::still(payload).map_err(|source| ReloadError::Decode { stage, source })
}

/// Decodes the radar GIF and keeps only the final frame; animated sources
/// publish a short history, and only the newest state is current.
fn decode_radar(payload: &[u8]) -> Result<Raster, ReloadError> {
    let mut rasters = decode::gif_frames(payload).map_err(|source| ReloadError::Decode {
        stage: Stage::Radar,
        source,
    })?;
    rasters.pop().ok_or(ReloadError::Decode {
        stage: Stage::Radar,
        source: DecodeError::EmptyAnimation,
    })
}
