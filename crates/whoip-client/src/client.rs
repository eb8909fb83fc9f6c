//! Main RDAP client implementation.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use whoip_core::{normalize, IpNetworkDocument, LookupReport, RdapError, Result};

use crate::registry::{default_endpoints, RegistryEndpoint};

/// RDAP media type sent in the `Accept` header
const RDAP_ACCEPT: &str = "application/rdap+json";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// RDAP lookup client.
///
/// Holds one shared HTTP connection pool; cloning is cheap and clones share
/// the pool. Each lookup is self-contained, so independent lookups may run
/// concurrently without coordination.
#[derive(Clone)]
pub struct RdapClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoints: Vec<RegistryEndpoint>,
}

impl RdapClient {
    /// Create a client with the default registry catalog and settings
    #[must_use]
    pub fn new() -> Self {
        RdapClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> RdapClientBuilder {
        RdapClientBuilder::new()
    }

    /// Fetch the raw registry document for `ip`.
    ///
    /// Queries the primary endpoint first; on a 302 or 404 (the registry is
    /// not authoritative for this address) probes the fallback endpoints in
    /// catalog order, once each, stopping at the first 200. Transport
    /// failures are fatal to the lookup and never retried.
    pub async fn resolve(&self, ip: &str) -> Result<IpNetworkDocument> {
        let Some((primary, fallbacks)) = self.inner.endpoints.split_first() else {
            return Err(RdapError::Exhausted { ip: ip.to_string() });
        };

        let mut response = self.fetch(primary, ip).await?;

        if matches!(response.status().as_u16(), 302 | 404) {
            for endpoint in fallbacks {
                response = self.fetch(endpoint, ip).await?;
                if response.status() == StatusCode::OK {
                    break;
                }
            }
        }

        if response.status() != StatusCode::OK {
            return Err(RdapError::Exhausted { ip: ip.to_string() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RdapError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(RdapError::Json)
    }

    /// Resolve `ip` and normalize the answering registry's document
    pub async fn lookup(&self, ip: &str) -> Result<LookupReport> {
        let document = self.resolve(ip).await?;
        Ok(normalize(&document))
    }

    /// The outermost lookup boundary: a JSON object that is either the
    /// normalized report or `{"error": "<message>"}`, never a mix of both.
    pub async fn lookup_json(&self, ip: &str) -> serde_json::Value {
        match self.lookup(ip).await {
            Ok(report) => serde_json::to_value(&report)
                .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        }
    }

    async fn fetch(&self, endpoint: &RegistryEndpoint, ip: &str) -> Result<Response> {
        let url = endpoint.lookup_url(ip);
        debug!(registry = %endpoint.name, url = %url, "querying registry");
        self.inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RdapError::Http(e.to_string()))
    }
}

impl Default for RdapClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring an [`RdapClient`]
pub struct RdapClientBuilder {
    timeout: Duration,
    user_agent: String,
    endpoints: Vec<RegistryEndpoint>,
}

impl RdapClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("whoip/{}", env!("CARGO_PKG_VERSION")),
            endpoints: default_endpoints(),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Replace the registry catalog (useful for testing). The first entry
    /// becomes the primary; the rest are fallbacks in list order.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Vec<RegistryEndpoint>) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Build the client.
    ///
    /// Redirect following is disabled so a primary's 302 reaches the
    /// fallback logic instead of being transparently chased.
    #[must_use]
    pub fn build(self) -> RdapClient {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(RDAP_ACCEPT));

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        RdapClient {
            inner: Arc::new(ClientInner {
                http,
                endpoints: self.endpoints,
            }),
        }
    }
}

impl Default for RdapClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
