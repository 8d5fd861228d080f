use std::time::Duration;

use async_trait::async_trait;

use crate::query::types::ServerAddress;
use crate::util::errors::{QueryError, Result};

/// Status-lookup endpoint queried when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "https://ping.lvjia.cc/mcapi.php";

/// Hard bound on one lookup, connection setup included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the raw status payload for a server address. Implement this to
/// swap out the HTTP client, e.g. for a canned transport in tests.
#[async_trait]
pub trait StatusTransport: Send + Sync {
    async fn fetch(&self, address: &ServerAddress) -> Result<String>;
}

/// Production transport: a single GET against the status API per lookup, no
/// retries.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl StatusTransport for HttpTransport {
    async fn fetch(&self, address: &ServerAddress) -> Result<String> {
        let port = address.port.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("host", address.host.as_str()), ("port", port.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Status request for {} failed: {}", address, e);
                QueryError::Unreachable
            })?;

        let response = response.error_for_status().map_err(|e| {
            tracing::debug!("Status service answered {:?} for {}", e.status(), address);
            QueryError::Unreachable
        })?;

        response.text().await.map_err(|_| QueryError::Unreachable)
    }
}
