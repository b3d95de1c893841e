use std::future::Future;

use parking_lot::RwLock;
use tracing::debug;
use url::Url;

use crate::{config::RoutingClientConfig, error::TransportError};

/// Issues HTTP GET requests and returns the response body as text.
///
/// Implementations are shared between concurrent callers and must not need
/// external synchronization.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: Url) -> impl Future<Output = Result<String, TransportError>> + Send;

    /// Releases connection resources. Calling it more than once is a no-op.
    fn shutdown(&self);
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
pub struct ReqwestTransport {
    client: RwLock<Option<reqwest::Client>>,
}

impl ReqwestTransport {
    pub fn new(config: &RoutingClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: RwLock::new(Some(builder.build()?)),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.client.read().is_none()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        // Clones share one connection pool
        let client = self.client.read().clone().ok_or(TransportError::Closed)?;

        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    fn shutdown(&self) {
        // Requests already in flight keep their own handle on the pool and
        // finish normally, the pool is dropped with the last of them.
        if self.client.write().take().is_some() {
            debug!("ReqwestTransport: connection pool released");
        }
    }
}
