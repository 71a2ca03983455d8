//! Continuous watch command.

use std::path::PathBuf;

use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use ameshview::{app, AmeshConfig};

use super::common::{build_runtime, save_composite, CommandError};

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Output PNG path, rewritten on every successful cycle.
    #[arg(short, long, default_value = "amesh.png")]
    pub output: PathBuf,

    /// Seconds between scheduled reloads.
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Runs the reload service until Ctrl-C, rewriting the PNG on each cycle.
pub fn run(mut config: AmeshConfig, args: WatchArgs) -> Result<(), CommandError> {
    if let Some(secs) = args.interval {
        config.reload_interval_secs = secs;
    }
    config.auto_reload = true;

    let runtime = build_runtime()?;

    runtime.block_on(async move {
        let service = app::build_service(&config)?;
        let mut output_rx = service.subscribe();

        let shutdown = CancellationToken::new();
        {
            let shutdown = shutdown.clone();
            ctrlc::set_handler(move || shutdown.cancel())?;
        }

        info!(
            interval_secs = config.reload_interval_secs,
            path = %args.output.display(),
            "watching"
        );
        let worker = tokio::spawn(service.run(shutdown.clone()));

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                changed = output_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let output = output_rx.borrow_and_update().clone();
                    if let Some(output) = output {
                        // A failed write should not take the watch down;
                        // the next cycle retries it.
                        match save_composite(&output, &args.output) {
                            Ok(()) => info!(
                                filename = %output.filename,
                                path = %args.output.display(),
                                "composite written"
                            ),
                            Err(e) => warn!(error = %e, "failed to write composite"),
                        }
                    }
                }
            }
        }

        let _ = worker.await;
        Ok(())
    })
}
