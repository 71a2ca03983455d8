//! HTTP transport abstraction and the upstream endpoint layout.
//!
//! The reload chain talks to the network exclusively through the
//! [`HttpClient`] trait, so tests can substitute a scripted transport. The
//! production implementation is [`ReqwestClient`]; the fixed Tokyo Amesh
//! URL set lives in [`Endpoints`].

mod amesh;
mod http;

pub use amesh::{Endpoints, DEFAULT_BORDER_URL, DEFAULT_MAP_URL, DEFAULT_RADAR_BASE_URL};
pub use http::{HttpClient, ProviderError, ReqwestClient, DEFAULT_TIMEOUT_SECS};

#[cfg(test)]
pub use http::tests::MockHttpClient;
