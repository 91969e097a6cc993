//! Remote isotherm sources.

use crate::conventions::ServiceConventions;
use crate::error::{WebBookError, WebBookResult};
use crate::query::IsothermQuery;
use std::time::Duration;
use tracing::debug;

/// Fluid-data endpoint of the NIST Chemistry WebBook.
pub const DEFAULT_ENDPOINT: &str = "https://webbook.nist.gov/cgi/fluid.cgi";

/// Source of raw isotherm responses.
///
/// Implementations must be thread-safe (Send + Sync): isotherms are fetched
/// from a worker pool.
pub trait IsothermSource: Send + Sync {
    /// Source name (for logging).
    fn name(&self) -> &str;

    /// Perform one request and return the raw response body.
    fn fetch(&self, query: &IsothermQuery) -> WebBookResult<String>;
}

/// Blocking HTTP client for the WebBook fluid service.
#[derive(Clone)]
pub struct WebBookClient {
    agent: ureq::Agent,
    endpoint: String,
    conventions: ServiceConventions,
}

impl WebBookClient {
    /// Client for the default endpoint with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
            conventions: ServiceConventions::default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn conventions(&self) -> &ServiceConventions {
        &self.conventions
    }
}

impl IsothermSource for WebBookClient {
    fn name(&self) -> &str {
        "NIST WebBook"
    }

    fn fetch(&self, query: &IsothermQuery) -> WebBookResult<String> {
        let url = query.url(&self.endpoint, &self.conventions);
        debug!(%url, "requesting isotherm");

        match self.agent.get(&url).call() {
            Ok(response) => response.into_string().map_err(|e| WebBookError::Network {
                message: format!("failed to read response body: {}", e),
            }),
            Err(ureq::Error::Status(status, _)) => Err(WebBookError::HttpStatus { status }),
            Err(ureq::Error::Transport(transport)) => Err(WebBookError::Network {
                message: transport.to_string(),
            }),
        }
    }
}
