//! Service assembly from configuration.

use crate::provider::ReqwestClient;
use crate::reload::ReloadChain;
use crate::schedule::ReloadScheduler;
use crate::service::AmeshService;

use super::{AmeshConfig, AppError};

/// Builds a ready-to-run service from a configuration.
///
/// The scheduler is attached only when `auto_reload` is set; without it the
/// service reloads solely on explicit
/// [`reload_now`](crate::service::AmeshService::reload_now) calls.
pub fn build_service(config: &AmeshConfig) -> Result<AmeshService<ReqwestClient>, AppError> {
    let client = ReqwestClient::with_timeout(config.http_timeout_secs)?;
    let chain = ReloadChain::new(client, config.endpoints.clone());

    let scheduler = config
        .auto_reload
        .then(|| ReloadScheduler::new(config.reload_interval()));

    Ok(AmeshService::new(chain, scheduler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_service_from_defaults() {
        let config = AmeshConfig::default();
        let service = build_service(&config).unwrap();
        assert!(service.output().is_none());
    }

    #[test]
    fn test_build_service_without_auto_reload() {
        let config = AmeshConfig::default().with_auto_reload(false);
        assert!(build_service(&config).is_ok());
    }
}
