//! The reload service: owns the chain, publishes the composite output.
//!
//! The service wraps a [`ReloadChain`] and an optional [`ReloadScheduler`]
//! behind a `tokio::sync::watch` channel. Consumers subscribe once and read
//! the latest [`CompositeOutput`] at any time; the value is replaced
//! atomically on each successful cycle and survives failed ones.
//!
//! Scheduling is split in two so the core stays clock-free: [`tick`]
//! receives an injected `now` and holds all the logic, while [`run`] is the
//! thin driver that feeds it real wall-clock time from a tokio interval.
//!
//! [`tick`]: AmeshService::tick
//! [`run`]: AmeshService::run

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::provider::HttpClient;
use crate::reload::{CompositeOutput, ReloadChain, ReloadError};
use crate::schedule::ReloadScheduler;

/// How often the run loop samples the clock. The scheduler quantizes the
/// actual reload cadence, so this only bounds trigger latency.
const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);

/// Long-running owner of the reload pipeline.
pub struct AmeshService<C: HttpClient> {
    chain: ReloadChain<C>,
    scheduler: Option<ReloadScheduler>,
    output_tx: watch::Sender<Option<CompositeOutput>>,
}

impl<C: HttpClient> AmeshService<C> {
    /// Creates a service; pass `None` as scheduler to disable auto-reload
    /// (reload then happens only through [`reload_now`](Self::reload_now)).
    pub fn new(chain: ReloadChain<C>, scheduler: Option<ReloadScheduler>) -> Self {
        let (output_tx, _) = watch::channel(None);
        Self {
            chain,
            scheduler,
            output_tx,
        }
    }

    /// A receiver over the published output; the current value is `None`
    /// until the first successful cycle.
    pub fn subscribe(&self) -> watch::Receiver<Option<CompositeOutput>> {
        self.output_tx.subscribe()
    }

    /// The currently published output, if any.
    pub fn output(&self) -> Option<CompositeOutput> {
        self.output_tx.borrow().clone()
    }

    /// Runs one reload cycle immediately and publishes the result.
    ///
    /// A failed cycle leaves the previous output published and reports the
    /// failing stage on the diagnostic channel.
    pub async fn reload_now(
        &mut self,
        now: NaiveDateTime,
    ) -> Result<CompositeOutput, ReloadError> {
        match self.chain.reload(now).await {
            Ok(output) => {
                self.output_tx.send_replace(Some(output.clone()));
                Ok(output)
            }
            Err(err) => {
                warn!(
                    stage = %err.stage(),
                    error = %err,
                    "reload cycle failed, keeping previous output"
                );
                Err(err)
            }
        }
    }

    /// Host-driven tick: reloads when the scheduler says one is due.
    ///
    /// With no scheduler this is a no-op, which makes reload purely
    /// caller-triggered.
    pub async fn tick(&mut self, now: NaiveDateTime) {
        let due = self
            .scheduler
            .as_mut()
            .map_or(false, |scheduler| scheduler.poll(now));
        if due {
            let _ = self.reload_now(now).await;
        }
    }

    /// Drives the service with real wall-clock time until `shutdown` fires.
    ///
    /// Performs one immediate reload at startup, then ticks once per
    /// second. Only one cycle is ever in flight: the loop owns the chain
    /// and awaits each cycle to completion before looking at the clock
    /// again.
    pub async fn run(mut self, shutdown: CancellationToken) {
        let _ = self.reload_now(Local::now().naive_local()).await;

        let mut ticker = tokio::time::interval(TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("shutdown requested, stopping reload service");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick(Local::now().naive_local()).await;
                }
            }
        }
    }
}
