//! One-shot fetch command.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::info;

use ameshview::{app, AmeshConfig};

use super::common::{build_runtime, save_composite, CommandError};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Output PNG path.
    #[arg(short, long, default_value = "amesh.png")]
    pub output: PathBuf,
}

/// Runs one reload cycle and writes the composite PNG.
pub fn run(config: AmeshConfig, args: FetchArgs) -> Result<(), CommandError> {
    let runtime = build_runtime()?;

    runtime.block_on(async {
        let mut service = app::build_service(&config)?;
        let output = service.reload_now(Local::now().naive_local()).await?;

        save_composite(&output, &args.output)?;
        info!(
            filename = %output.filename,
            path = %args.output.display(),
            width = output.raster.width(),
            height = output.raster.height(),
            "composite written"
        );
        Ok(())
    })
}
