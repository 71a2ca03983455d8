//! Tokyo Amesh endpoint layout.
//!
//! The upstream service publishes three fixed resources: a JPEG base map,
//! a PNG prefectural-border overlay with alpha, and a directory of radar
//! GIF frames named on a 5-minute grid (see [`crate::frames`]).

/// Base map (JPEG) published at a constant URL.
pub const DEFAULT_MAP_URL: &str = "https://tokyo-ame.jwa.or.jp/map/map000.jpg";

/// Prefectural-border overlay (PNG with alpha) published at a constant URL.
pub const DEFAULT_BORDER_URL: &str = "https://tokyo-ame.jwa.or.jp/map/msk000.png";

/// Directory holding the time-indexed radar frames.
pub const DEFAULT_RADAR_BASE_URL: &str = "https://tokyo-ame.jwa.or.jp/mesh/000";

/// The three upstream URLs, overridable for tests and mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    map_url: String,
    border_url: String,
    radar_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            map_url: DEFAULT_MAP_URL.to_string(),
            border_url: DEFAULT_BORDER_URL.to_string(),
            radar_base_url: DEFAULT_RADAR_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Replaces the base map URL.
    pub fn with_map_url(mut self, url: impl Into<String>) -> Self {
        self.map_url = url.into();
        self
    }

    /// Replaces the border overlay URL.
    pub fn with_border_url(mut self, url: impl Into<String>) -> Self {
        self.border_url = url.into();
        self
    }

    /// Replaces the radar frame directory URL.
    pub fn with_radar_base_url(mut self, url: impl Into<String>) -> Self {
        self.radar_base_url = url.into();
        self
    }

    pub fn map_url(&self) -> &str {
        &self.map_url
    }

    pub fn border_url(&self) -> &str {
        &self.border_url
    }

    /// Builds the full URL of a radar frame from its filename.
    pub fn radar_url(&self, filename: &str) -> String {
        format!("{}/{}", self.radar_base_url.trim_end_matches('/'), filename)
    }
}
