use crate::config::Config;
use crate::error::{Error, StaffoResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that can perform an authenticated GET and hand back the body
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the body bytes, whatever the HTTP status
    async fn get(&self, url: &str) -> StaffoResult<Vec<u8>>;
}

/// reqwest-backed fetcher sending HTTP Basic credentials
pub struct HttpFetcher {
    client: Client,
    username: String,
    password: String,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout
    pub fn new(config: &Config) -> StaffoResult<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout
    pub fn with_timeout(config: &Config, timeout: Duration) -> StaffoResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> StaffoResult<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("GET {} failed: {}", url, e)))?;

        // The body is handed back for every status; callers print or decode it as-is
        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned HTTP {}", url, status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read body of {}: {}", url, e)))?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}
