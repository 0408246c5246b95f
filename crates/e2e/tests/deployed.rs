//! Smoke checks against a running deployment.
//!
//! Point `DEPLOYED_APP_URL` (or `BASE_URL`) at the service (defaults
//! to the local NodePort address) and run:
//!
//! ```sh
//! cargo test -p hellosmoke-e2e --test deployed -- --ignored
//! ```

use hellosmoke_e2e::client::TestContext;

async fn get_ctx() -> TestContext {
    TestContext::new(&TestContext::base_url_from_env()).expect("invalid base URL")
}

macro_rules! smoke_test {
    ($module:ident :: $name:ident) => {
        #[tokio::test]
        #[ignore = "requires a deployed service"]
        async fn $name() {
            let ctx = get_ctx().await;
            hellosmoke_e2e::specs::$module::$name(&ctx).await.unwrap();
        }
    };
}

hellosmoke_e2e::for_each_spec!(smoke_test);
