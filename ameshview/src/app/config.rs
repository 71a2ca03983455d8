//! Application configuration.
//!
//! `AmeshConfig` carries everything needed to assemble the service:
//! endpoint URLs, the reload schedule, and the transport timeout. Defaults
//! match the production Tokyo Amesh deployment; every field can be
//! overridden through the builder methods or an INI file:
//!
//! ```ini
//! [reload]
//! interval = 180
//! auto = true
//!
//! [http]
//! timeout = 30
//!
//! [endpoints]
//! map = https://tokyo-ame.jwa.or.jp/map/map000.jpg
//! border = https://tokyo-ame.jwa.or.jp/map/msk000.png
//! radar_base = https://tokyo-ame.jwa.or.jp/mesh/000
//! ```
//!
//! Missing sections and keys fall back to defaults; unknown keys are
//! ignored.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use ini::Ini;

use crate::provider::{Endpoints, DEFAULT_TIMEOUT_SECS};
use crate::schedule::DEFAULT_RELOAD_INTERVAL_SECS;

use super::AppError;

/// Default request timeout, re-exported for the CLI help text.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT_SECS;

/// Top-level configuration for the reload service.
#[derive(Debug, Clone)]
pub struct AmeshConfig {
    /// Upstream URL set.
    pub endpoints: Endpoints,

    /// Seconds between scheduled reload attempts.
    pub reload_interval_secs: u64,

    /// Whether the auto-reload scheduler is active at all.
    pub auto_reload: bool,

    /// Transport request timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Default for AmeshConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            reload_interval_secs: DEFAULT_RELOAD_INTERVAL_SECS,
            auto_reload: true,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AmeshConfig {
    /// Replaces the endpoint set.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets the reload interval in seconds.
    pub fn with_reload_interval_secs(mut self, secs: u64) -> Self {
        self.reload_interval_secs = secs;
        self
    }

    /// Enables or disables the auto-reload scheduler.
    pub fn with_auto_reload(mut self, auto_reload: bool) -> Self {
        self.auto_reload = auto_reload;
        self
    }

    /// Sets the transport timeout in seconds.
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Loads configuration from an INI file, starting from defaults.
    pub fn from_ini(path: &Path) -> Result<Self, AppError> {
        let ini = Ini::load_from_file(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::default();

        if let Some(section) = ini.section(Some("reload")) {
            if let Some(value) = section.get("interval") {
                config.reload_interval_secs = parse_key("reload.interval", value)?;
            }
            if let Some(value) = section.get("auto") {
                config.auto_reload = parse_key("reload.auto", value)?;
            }
        }

        if let Some(section) = ini.section(Some("http")) {
            if let Some(value) = section.get("timeout") {
                config.http_timeout_secs = parse_key("http.timeout", value)?;
            }
        }

        if let Some(section) = ini.section(Some("endpoints")) {
            let mut endpoints = Endpoints::default();
            if let Some(url) = section.get("map") {
                endpoints = endpoints.with_map_url(url);
            }
            if let Some(url) = section.get("border") {
                endpoints = endpoints.with_border_url(url);
            }
            if let Some(url) = section.get("radar_base") {
                endpoints = endpoints.with_radar_base_url(url);
            }
            config.endpoints = endpoints;
        }

        Ok(config)
    }

    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.reload_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_key<T: FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Config(format!("invalid value for {}: {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AmeshConfig::default();
        assert_eq!(config.reload_interval_secs, 180);
        assert!(config.auto_reload);
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AmeshConfig::default()
            .with_reload_interval_secs(60)
            .with_auto_reload(false)
            .with_http_timeout_secs(5);
        assert_eq!(config.reload_interval(), Duration::from_secs(60));
        assert!(!config.auto_reload);
        assert_eq!(config.http_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_ini_full() {
        let file = write_config(
            "[reload]\ninterval = 300\nauto = false\n\n\
             [http]\ntimeout = 10\n\n\
             [endpoints]\nmap = http://localhost/m.jpg\nborder = http://localhost/b.png\nradar_base = http://localhost/mesh\n",
        );

        let config = AmeshConfig::from_ini(file.path()).unwrap();
        assert_eq!(config.reload_interval_secs, 300);
        assert!(!config.auto_reload);
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.endpoints.map_url(), "http://localhost/m.jpg");
        assert_eq!(
            config.endpoints.radar_url("x.gif"),
            "http://localhost/mesh/x.gif"
        );
    }

    #[test]
    fn test_from_ini_partial_falls_back_to_defaults() {
        let file = write_config("[reload]\ninterval = 120\n");

        let config = AmeshConfig::from_ini(file.path()).unwrap();
        assert_eq!(config.reload_interval_secs, 120);
        assert!(config.auto_reload);
        assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_from_ini_rejects_bad_number() {
        let file = write_config("[reload]\ninterval = soon\n");

        let err = AmeshConfig::from_ini(file.path()).unwrap_err();
        assert!(err.to_string().contains("reload.interval"));
    }

    #[test]
    fn test_from_ini_missing_file() {
        let err = AmeshConfig::from_ini(Path::new("/nonexistent/amesh.ini")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
