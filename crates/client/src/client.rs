use std::time::Duration;

use tracing::debug;

use crate::error::{CheckError, CheckResult};

/// Status the deployed service must answer with at `GET /`.
pub const EXPECTED_STATUS: u16 = 200;

/// Body the deployed service must answer with at `GET /`.
pub const EXPECTED_GREETING: &str = "Hello, World!";

/// Typed HTTP client for the deployed hello service.
///
/// Provides the single smoke operation (`check_hello`) and a raw `get`
/// for callers that need the response itself (e.g. E2E specs probing
/// other paths).
pub struct SmokeClient {
    client: reqwest::Client,
    base_url: String,
}

impl SmokeClient {
    /// Create a new client with the given base URL and request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> CheckResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Create from an existing `reqwest::Client` (e.g. shared in tests).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> CheckResult<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the underlying `reqwest::Client`.
    pub fn reqwest_client(&self) -> &reqwest::Client {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET returning the raw response.
    pub async fn get(&self, path: &str) -> CheckResult<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Smoke-check the deployed service: `GET /` must answer `200 OK`
    /// with body exactly [`EXPECTED_GREETING`].
    ///
    /// Transport failures surface as [`CheckError::Network`]; a wrong
    /// status or body surfaces as the matching assertion variant with
    /// the actual value preserved. No retries.
    pub async fn check_hello(&self) -> CheckResult<()> {
        debug!("smoke-checking {}", self.base_url);
        let resp = self.client.get(self.url("/")).send().await?;

        let status = resp.status().as_u16();
        if status != EXPECTED_STATUS {
            return Err(CheckError::Status {
                expected: EXPECTED_STATUS,
                actual: status,
            });
        }

        let body = resp.text().await?;
        if body != EXPECTED_GREETING {
            return Err(CheckError::Body {
                expected: EXPECTED_GREETING.to_string(),
                actual: body,
            });
        }
        Ok(())
    }
}

/// Validate and normalize a base URL: non-empty, absolute http(s),
/// trailing slashes trimmed.
fn normalize_base_url(base_url: &str) -> CheckResult<String> {
    let trimmed = base_url.trim_end_matches('/');
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(CheckError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(trimmed.to_string())
}
