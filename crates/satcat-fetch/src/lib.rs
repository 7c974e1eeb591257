//! # satcat-fetch
//!
//! Downloads the raw satellite catalog as one text blob.
//!
//! Automatic redirects are disabled on the underlying `reqwest` client; the
//! fetch loop follows 301/302 itself so the hop count is explicit and
//! bounded. The whole body is buffered because the catalog is processed as a
//! whole downstream.

mod error;
mod http;

pub use error::FetchError;

use std::time::Duration;

use reqwest::Url;

use crate::http::{Step, classify};

/// Settings for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub user_agent: String,
    pub timeout: Duration,
    /// Maximum number of 301/302 hops per fetch.
    pub max_redirects: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("satcat/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(120),
            max_redirects: 5,
        }
    }
}

/// HTTP client for retrieving the catalog.
pub struct CatalogClient {
    http: reqwest::Client,
    max_redirects: u32,
}

impl CatalogClient {
    /// Create a client with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g. TLS backend initialization).
    pub fn new(options: &ClientOptions) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            http,
            max_redirects: options.max_redirects,
        })
    }

    /// GET `url` and return the full body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a terminal non-2xx
    /// status, a redirect without `Location`, or more than
    /// `max_redirects` hops.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let mut current = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let mut hops = 0u32;

        tracing::info!(url = %current, "downloading catalog");
        loop {
            let resp = self.http.get(current.clone()).send().await?;
            match classify(resp, &current)? {
                Step::Redirect(target) => {
                    if hops == self.max_redirects {
                        return Err(FetchError::TooManyRedirects {
                            limit: self.max_redirects,
                            url: url.to_string(),
                        });
                    }
                    hops += 1;
                    tracing::debug!(from = %current, to = %target, hops, "following redirect");
                    current = target;
                }
                Step::Body(resp) => {
                    let text = resp.text().await?;
                    tracing::info!(
                        url = %current,
                        size_mb = %format!("{:.2}", megabytes(text.len())),
                        "downloaded catalog"
                    );
                    return Ok(text);
                }
            }
        }
    }
}

/// Byte count as mebibytes, for log and summary lines.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_defaults() {
        let client = CatalogClient::new(&ClientOptions::default()).unwrap();
        assert_eq!(client.max_redirects, 5);
    }

    #[tokio::test]
    async fn rejects_unparseable_url() {
        let client = CatalogClient::new(&ClientOptions::default()).unwrap();
        let err = client.fetch_text("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn megabytes_of_two_mib() {
        assert!((megabytes(2 * 1024 * 1024) - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_gcat_header() {
        let client = CatalogClient::new(&ClientOptions::default()).unwrap();
        let text = client
            .fetch_text("https://planet4589.org/space/gcat/tsv/cat/satcat.tsv")
            .await
            .unwrap();
        let header = text.lines().next().unwrap_or_default();
        println!("header: {header}");
        assert!(header.to_ascii_lowercase().contains("mass"));
    }
}
