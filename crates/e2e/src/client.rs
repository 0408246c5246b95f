use std::time::Duration;

use hellosmoke_client::{CheckResult, SmokeClient};

/// Address of the service under test when nothing is configured
/// (the deployment's NodePort).
pub const DEFAULT_BASE_URL: &str = "http://localhost:30000";

/// Per-request timeout for smoke checks.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Holds connection info for a test run.
pub struct TestContext {
    pub api: SmokeClient,
}

impl TestContext {
    pub fn new(base_url: &str) -> CheckResult<Self> {
        Ok(Self {
            api: SmokeClient::new(base_url, CHECK_TIMEOUT)?,
        })
    }

    /// Base URL from the environment: `DEPLOYED_APP_URL`, then
    /// `BASE_URL`, then [`DEFAULT_BASE_URL`].
    pub fn base_url_from_env() -> String {
        std::env::var("DEPLOYED_APP_URL")
            .or_else(|_| std::env::var("BASE_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
    }
}
