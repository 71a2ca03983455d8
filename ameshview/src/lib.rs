//! Ameshview - Live precipitation-radar compositing for the Tokyo Amesh service
//!
//! This library fetches the three raster layers published by the Tokyo Amesh
//! precipitation radar (base map, prefectural-border overlay, and the newest
//! 5-minute radar frame), decodes them, and merges them into a single
//! composite image. The merged output is republished on a wall-clock
//! schedule and can be consumed by any presentation shell through a watch
//! channel.
//!
//! # Layering rules
//!
//! Per pixel, bottom to top:
//!
//! 1. the base map color,
//! 2. the radar color, unless the radar pixel is pure black (black encodes
//!    "no precipitation data" and lets the map show through),
//! 3. the border color, wherever the border overlay has any alpha.
//!
//! # Example
//!
//! ```ignore
//! use ameshview::{app, AmeshConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = AmeshConfig::default();
//! let service = app::build_service(&config)?;
//! let mut output = service.subscribe();
//! tokio::spawn(service.run(CancellationToken::new()));
//!
//! output.changed().await?;
//! if let Some(composite) = output.borrow().as_ref() {
//!     println!("{} ({}x{})", composite.filename, composite.raster.width(), composite.raster.height());
//! }
//! ```

pub mod app;
pub mod composite;
pub mod decode;
pub mod frames;
pub mod provider;
pub mod raster;
pub mod reload;
pub mod schedule;
pub mod service;
pub mod telemetry;

pub use app::{AmeshConfig, AppError};
pub use raster::{Pixel, Raster};
pub use reload::{CompositeOutput, ReloadChain, ReloadError};
pub use service::AmeshService;
