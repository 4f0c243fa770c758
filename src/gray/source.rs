//! Remote stylesheet source.
//!
//! One HTTP GET per theme; any 2xx body is the stylesheet, kept as raw bytes.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;

/// Something that can return stylesheet bytes for a theme URL.
#[async_trait]
pub trait StylesheetSource: Send + Sync {
    /// Fetch the full body at `url` without decoding it. Non-2xx responses
    /// are errors.
    async fn fetch_stylesheet(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Build the stylesheet URL for `theme` under the repository `base` URL.
pub fn theme_url(base: &str, theme: &str) -> String {
    format!("{}/{theme}.css", base.trim_end_matches('/'))
}

/// reqwest-backed [`StylesheetSource`].
pub struct HttpStylesheetSource {
    http: reqwest::Client,
}

impl HttpStylesheetSource {
    /// Build a client with `timeout` applied to each request.
    pub fn new(timeout: Duration) -> Self {
        // Fall back to reqwest defaults if builder creation fails for any reason.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("justd/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http }
    }
}

#[async_trait]
impl StylesheetSource for HttpStylesheetSource {
    async fn fetch_stylesheet(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "stylesheet response");
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            return Err(FetchError::Status {
                code: status.as_u16(),
                status_text,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
