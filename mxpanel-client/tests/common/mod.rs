//! Shared helpers for live-panel integration tests.
//!
//! These tests run against a real control panel and are skipped unless the
//! `MXPANEL_TEST_*` environment variables are present.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use mxpanel_client::{HttpsTransport, LoginIdentity, PanelApi, SessionConfig};

/// Skip the current test when any of the named environment variables is
/// missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Live test context over one panel account.
pub struct TestContext {
    pub api: PanelApi,
    pub account: String,
}

impl TestContext {
    /// Sub-account-scope context from the environment, or `None` when any
    /// variable is missing.
    pub fn sub_account() -> Option<Self> {
        let hostname = env::var("MXPANEL_TEST_HOSTNAME").ok()?;
        let username = env::var("MXPANEL_TEST_USERNAME").ok()?;
        let account = env::var("MXPANEL_TEST_ACCOUNT").ok()?;
        let api_key = env::var("MXPANEL_TEST_API_KEY").ok()?;

        let config = SessionConfig::new(
            hostname,
            LoginIdentity::sub_account(username, account.clone()),
            api_key,
        );
        Some(Self {
            api: PanelApi::new(Arc::new(HttpsTransport::new(config))),
            account,
        })
    }

    /// Server-scope context from the environment.
    pub fn server() -> Option<Self> {
        let hostname = env::var("MXPANEL_TEST_HOSTNAME").ok()?;
        let username = env::var("MXPANEL_TEST_USERNAME").ok()?;
        let account = env::var("MXPANEL_TEST_ACCOUNT").ok()?;
        let api_key = env::var("MXPANEL_TEST_API_KEY").ok()?;

        let config = SessionConfig::new(hostname, LoginIdentity::server(username), api_key);
        Some(Self {
            api: PanelApi::new(Arc::new(HttpsTransport::new(config))),
            account,
        })
    }
}
