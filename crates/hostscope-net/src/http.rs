//! HTTP backend abstraction for probe transfers.
//!
//! The prober measures wall-clock time around these calls, so the trait
//! only moves bytes; a fake backend with injected delays exercises the
//! full measurement path in tests.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::error::{NetError, NetResult};

/// Per-request bound; probes must not block indefinitely on an
/// unreachable endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for backends that perform the raw probe transfers.
#[async_trait]
pub trait ProbeBackend: Send + Sync {
    /// GET a URL and return the response body as text.
    async fn get_text(&self, url: &Url) -> NetResult<String>;

    /// GET a URL, drain the body, and return the number of bytes received.
    async fn get_bytes(&self, url: &Url) -> NetResult<u64>;

    /// POST a payload to a URL and return the number of bytes sent.
    async fn post_bytes(&self, url: &Url, payload: Vec<u8>) -> NetResult<u64>;
}

/// Production backend using `reqwest`.
///
/// No retry logic: the prober attempts each measurement exactly once and
/// reports the failure instead.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the probe timeout and UA.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hostscope/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    async fn checked_get(&self, url: &Url) -> NetResult<reqwest::Response> {
        let response = self.client.get(url.as_str()).send().await?;
        check_status(url, &response)?;
        Ok(response)
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn check_status(url: &Url, response: &reqwest::Response) -> NetResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(NetError::RequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ProbeBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> NetResult<String> {
        let response = self.checked_get(url).await?;
        Ok(response.text().await?)
    }

    async fn get_bytes(&self, url: &Url) -> NetResult<u64> {
        let response = self.checked_get(url).await?;
        let body = response.bytes().await?;
        Ok(body.len() as u64)
    }

    async fn post_bytes(&self, url: &Url, payload: Vec<u8>) -> NetResult<u64> {
        let sent = payload.len() as u64;
        let response = self.client.post(url.as_str()).body(payload).send().await?;
        check_status(url, &response)?;
        Ok(sent)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Canned behavior for one endpoint pattern.
    #[derive(Clone)]
    pub enum CannedProbe {
        /// Respond with this body text.
        Text(&'static str),
        /// Respond with a payload of this many bytes.
        Payload(u64),
        /// Accept an upload of any size.
        Accept,
        /// Fail with this HTTP status.
        Status(u16),
    }

    /// A fake probe backend that returns canned responses, optionally
    /// after a delay (to exercise the timing path).
    #[derive(Default)]
    pub struct FakeBackend {
        responses: HashMap<String, (CannedProbe, Duration)>,
    }

    impl FakeBackend {
        /// Create a new fake backend; unmatched URLs answer 404.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a URL pattern.
        #[must_use]
        pub fn with_response(self, url_contains: &str, response: CannedProbe) -> Self {
            self.with_delayed_response(url_contains, response, Duration::ZERO)
        }

        /// Add a canned response served after `delay`.
        #[must_use]
        pub fn with_delayed_response(
            mut self,
            url_contains: &str,
            response: CannedProbe,
            delay: Duration,
        ) -> Self {
            self.responses
                .insert(url_contains.to_string(), (response, delay));
            self
        }

        async fn serve(&self, url: &Url) -> NetResult<CannedProbe> {
            let canned = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, response)| response.clone());

            let Some((response, delay)) = canned else {
                return Err(NetError::RequestFailed {
                    status: 404,
                    url: url.to_string(),
                });
            };

            tokio::time::sleep(delay).await;

            if let CannedProbe::Status(status) = response {
                return Err(NetError::RequestFailed {
                    status,
                    url: url.to_string(),
                });
            }
            Ok(response)
        }
    }

    #[async_trait]
    impl ProbeBackend for FakeBackend {
        async fn get_text(&self, url: &Url) -> NetResult<String> {
            match self.serve(url).await? {
                CannedProbe::Text(text) => Ok(text.to_string()),
                _ => Ok(String::new()),
            }
        }

        async fn get_bytes(&self, url: &Url) -> NetResult<u64> {
            match self.serve(url).await? {
                CannedProbe::Payload(bytes) => Ok(bytes),
                CannedProbe::Text(text) => Ok(text.len() as u64),
                _ => Ok(0),
            }
        }

        async fn post_bytes(&self, url: &Url, payload: Vec<u8>) -> NetResult<u64> {
            self.serve(url).await?;
            Ok(payload.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{CannedProbe, FakeBackend};
    use super::*;

    #[test]
    fn reqwest_backend_constructs() {
        let _backend = ReqwestBackend::new();
    }

    #[tokio::test]
    async fn fake_backend_returns_canned_text() {
        let backend = FakeBackend::new().with_response("ip", CannedProbe::Text("198.51.100.4"));
        let url = Url::parse("https://example.com/ip").unwrap();

        assert_eq!(backend.get_text(&url).await.unwrap(), "198.51.100.4");
    }

    #[tokio::test]
    async fn fake_backend_unknown_url_is_404() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://example.com/missing").unwrap();

        let err = backend.get_text(&url).await.unwrap_err();
        assert!(matches!(err, NetError::RequestFailed { status: 404, .. }));
    }

    #[tokio::test]
    async fn fake_backend_counts_payload_bytes() {
        let backend = FakeBackend::new().with_response("down", CannedProbe::Payload(3_000_000));
        let url = Url::parse("https://example.com/down").unwrap();

        assert_eq!(backend.get_bytes(&url).await.unwrap(), 3_000_000);
    }

    #[tokio::test]
    async fn fake_backend_accepts_uploads() {
        let backend = FakeBackend::new().with_response("up", CannedProbe::Accept);
        let url = Url::parse("https://example.com/up").unwrap();

        assert_eq!(
            backend.post_bytes(&url, vec![0; 500]).await.unwrap(),
            500
        );
    }
}
