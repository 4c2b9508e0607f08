//! Webmail single-sign-on key service.

use std::net::IpAddr;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mxpanel_client::{LoginKeyRequest, DEFAULT_ADMIN_PORT};
use serde::Serialize;

use crate::error::CoreResult;
use crate::services::{random_hex, ServiceContext};
use crate::traits::SessionScope;
use crate::types::CallerId;

/// How long an issued login key stays valid.
const KEY_TTL_SECS: i64 = 3600;
/// Entropy behind the key itself (rendered as hex).
const KEY_BYTES: usize = 10;
/// Entropy behind the key's name on the panel.
const KEY_NAME_BYTES: usize = 5;

/// A freshly minted single-sign-on ticket.
///
/// Carries everything the presentation layer needs to redirect the browser
/// into webmail. The key is a live bearer credential: it is IP-bound,
/// cleared on first use, dead after [`expires_at`](Self::expires_at), and
/// intentionally absent from this type's `Debug` output.
#[derive(Clone, Serialize)]
pub struct SsoTicket {
    /// Panel username to log in as.
    pub username: String,
    /// Panel hostname.
    pub hostname: String,
    /// The one-time login key.
    pub key: String,
    /// When the key stops working.
    pub expires_at: DateTime<Utc>,
}

impl SsoTicket {
    /// The panel's login endpoint the browser should be sent to.
    #[must_use]
    pub fn login_endpoint(&self) -> String {
        format!("https://{}:{}/CMD_LOGIN", self.hostname, DEFAULT_ADMIN_PORT)
    }
}

impl std::fmt::Debug for SsoTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsoTicket")
            .field("username", &self.username)
            .field("hostname", &self.hostname)
            .field("key", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Webmail single-sign-on key service.
pub struct SsoService {
    ctx: Arc<ServiceContext>,
}

impl SsoService {
    /// Create an SSO service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Mint a one-hour, IP-restricted login key for the account.
    ///
    /// The key and its name come from the OS entropy source, are registered
    /// on the panel bound to `client_ip`, and are returned to the caller
    /// without being persisted or logged anywhere in between.
    pub async fn login_key(
        &self,
        caller: &CallerId,
        account_id: &str,
        client_ip: IpAddr,
    ) -> CoreResult<SsoTicket> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let server = self.ctx.server_for(&account).await?;

        let key = random_hex(KEY_BYTES);
        let expires_at = Utc::now() + Duration::seconds(KEY_TTL_SECS);

        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        api.create_login_key(&LoginKeyRequest {
            key_name: random_hex(KEY_NAME_BYTES),
            key: key.clone(),
            expiry_timestamp: expires_at.timestamp(),
            ip: client_ip.to_string(),
            passwd: server.api_key.clone(),
        })
        .await?;

        Ok(SsoTicket {
            username: account.username,
            hostname: server.hostname,
            key,
            expires_at,
        })
    }
}
