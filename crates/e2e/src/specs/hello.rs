use anyhow::{Context, Result};

use crate::client::TestContext;

/// `GET /` on the deployed service answers `200 OK` with the exact
/// greeting `"Hello, World!"`.
pub async fn returns_greeting(ctx: &TestContext) -> Result<()> {
    ctx.api
        .check_hello()
        .await
        .with_context(|| format!("smoke check against {}", ctx.api.base_url()))
}
