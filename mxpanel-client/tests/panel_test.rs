//! Read-only integration tests against a live control panel.
//!
//! Gated on the `MXPANEL_TEST_*` environment variables; every test here only
//! reads state, so it is safe to point at a production account.

mod common;

use common::TestContext;

#[tokio::test]
async fn list_domains_live() {
    skip_if_no_credentials!(
        "MXPANEL_TEST_HOSTNAME",
        "MXPANEL_TEST_USERNAME",
        "MXPANEL_TEST_ACCOUNT",
        "MXPANEL_TEST_API_KEY"
    );

    let Some(ctx) = TestContext::sub_account() else {
        return;
    };

    let domains = ctx.api.show_domains().await.unwrap();
    // Accounts always carry at least one domain.
    assert!(!domains.is_empty(), "account has no domains");
}

#[tokio::test]
async fn list_mailboxes_for_each_domain_live() {
    skip_if_no_credentials!(
        "MXPANEL_TEST_HOSTNAME",
        "MXPANEL_TEST_USERNAME",
        "MXPANEL_TEST_ACCOUNT",
        "MXPANEL_TEST_API_KEY"
    );

    let Some(ctx) = TestContext::sub_account() else {
        return;
    };

    for domain in ctx.api.show_domains().await.unwrap() {
        // Listing must decode even for domains with zero mailboxes.
        let _ = ctx.api.list_mailboxes(&domain).await.unwrap();
    }
}

#[tokio::test]
async fn usage_and_limits_live() {
    skip_if_no_credentials!(
        "MXPANEL_TEST_HOSTNAME",
        "MXPANEL_TEST_USERNAME",
        "MXPANEL_TEST_ACCOUNT",
        "MXPANEL_TEST_API_KEY"
    );

    let Some(ctx) = TestContext::server() else {
        return;
    };

    let usage = ctx.api.user_usage(&ctx.account).await.unwrap();
    let config = ctx.api.user_config(&ctx.account).await.unwrap();
    assert!(usage.get("quota").is_some());
    assert!(config.get("quota").is_some());
}
