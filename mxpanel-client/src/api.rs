//! Typed wrappers for the panel commands the orchestration layer uses.
//!
//! Each method issues exactly one command and decodes the reply through
//! [`ApiResponse`]. Mutating commands convert the protocol error flag into
//! [`ClientError::CommandFailed`]; reads tolerate an absent `list` field and
//! return an empty collection.

use std::sync::Arc;

use crate::codec::ApiResponse;
use crate::error::Result;
use crate::transport::PanelTransport;

const CMD_SHOW_DOMAINS: &str = "/CMD_API_SHOW_DOMAINS";
const CMD_POP: &str = "/CMD_API_POP";
const CMD_DOMAIN: &str = "/CMD_API_DOMAIN";
const CMD_DNS_CONTROL: &str = "/CMD_API_DNS_CONTROL";
const CMD_SHOW_USER_USAGE: &str = "/CMD_API_SHOW_USER_USAGE";
const CMD_SHOW_USER_CONFIG: &str = "/CMD_API_SHOW_USER_CONFIG";
const CMD_LOGIN_KEYS: &str = "/CMD_API_LOGIN_KEYS";

/// Parameters for minting a one-time login key.
///
/// The key is IP-bound, cleared on first use, and expires at
/// `expiry_timestamp`. The panel requires the session's API key repeated in
/// the request body (`passwd`) to authorize key creation.
#[derive(Debug, Clone)]
pub struct LoginKeyRequest {
    /// Name under which the key is filed on the panel.
    pub key_name: String,
    /// The key material itself.
    pub key: String,
    /// Unix timestamp after which the key is dead.
    pub expiry_timestamp: i64,
    /// Source address the key is restricted to.
    pub ip: String,
    /// The session's API key, repeated per the panel's protocol.
    pub passwd: String,
}

/// Typed command surface over a [`PanelTransport`].
#[derive(Clone)]
pub struct PanelApi {
    transport: Arc<dyn PanelTransport>,
}

impl PanelApi {
    /// Wrap a transport.
    #[must_use]
    pub fn new(transport: Arc<dyn PanelTransport>) -> Self {
        Self { transport }
    }

    /// Domains visible to the session's identity.
    ///
    /// An account with no domains decodes to an empty list.
    pub async fn show_domains(&self) -> Result<Vec<String>> {
        let body = self.transport.get(CMD_SHOW_DOMAINS, &[]).await?;
        let response = ApiResponse::parse(&body).into_success(CMD_SHOW_DOMAINS)?;
        Ok(response.list().to_vec())
    }

    /// Mailbox local parts that exist under `domain`.
    pub async fn list_mailboxes(&self, domain: &str) -> Result<Vec<String>> {
        let body = self
            .transport
            .get(CMD_POP, &[("action", "list"), ("domain", domain)])
            .await?;
        let response = ApiResponse::parse(&body).into_success(CMD_POP)?;
        Ok(response.list().to_vec())
    }

    /// Create a mailbox with the given password and no quota cap.
    pub async fn create_mailbox(&self, domain: &str, user: &str, password: &str) -> Result<()> {
        let body = self
            .transport
            .post(
                CMD_POP,
                &[
                    ("action", "create"),
                    ("domain", domain),
                    ("user", user),
                    ("passwd", password),
                    ("passwd2", password),
                    ("quota", "0"),
                ],
            )
            .await?;
        ApiResponse::parse(&body).into_success(CMD_POP)?;
        Ok(())
    }

    /// Delete a mailbox.
    pub async fn delete_mailbox(&self, domain: &str, user: &str) -> Result<()> {
        let body = self
            .transport
            .post(
                CMD_POP,
                &[("action", "delete"), ("domain", domain), ("user", user)],
            )
            .await?;
        ApiResponse::parse(&body).into_success(CMD_POP)?;
        Ok(())
    }

    /// Replace a mailbox's password.
    pub async fn set_mailbox_password(
        &self,
        domain: &str,
        user: &str,
        password: &str,
    ) -> Result<()> {
        let body = self
            .transport
            .post(
                CMD_POP,
                &[
                    ("action", "modify"),
                    ("domain", domain),
                    ("user", user),
                    ("passwd", password),
                    ("passwd2", password),
                    ("quota", "0"),
                ],
            )
            .await?;
        ApiResponse::parse(&body).into_success(CMD_POP)?;
        Ok(())
    }

    /// Create a domain under the session's account.
    pub async fn create_domain(&self, domain: &str) -> Result<()> {
        let body = self
            .transport
            .post(CMD_DOMAIN, &[("action", "create"), ("domain", domain)])
            .await?;
        ApiResponse::parse(&body).into_success(CMD_DOMAIN)?;
        Ok(())
    }

    /// Delete a domain. The panel wants the selection-list form of the
    /// command, confirmation included.
    pub async fn delete_domain(&self, domain: &str) -> Result<()> {
        let body = self
            .transport
            .post(
                CMD_DOMAIN,
                &[
                    ("delete", "delete"),
                    ("confirmed", "delete"),
                    ("select0", domain),
                ],
            )
            .await?;
        ApiResponse::parse(&body).into_success(CMD_DOMAIN)?;
        Ok(())
    }

    /// Raw usage figures for a hosting account (server-scope session).
    pub async fn user_usage(&self, user: &str) -> Result<ApiResponse> {
        let body = self
            .transport
            .post(CMD_SHOW_USER_USAGE, &[("user", user)])
            .await?;
        ApiResponse::parse(&body).into_success(CMD_SHOW_USER_USAGE)
    }

    /// Configured limits for a hosting account (server-scope session).
    pub async fn user_config(&self, user: &str) -> Result<ApiResponse> {
        let body = self
            .transport
            .post(CMD_SHOW_USER_CONFIG, &[("user", user)])
            .await?;
        ApiResponse::parse(&body).into_success(CMD_SHOW_USER_CONFIG)
    }

    /// Raw DNS zone dump for a domain.
    ///
    /// Unlike every other command this returns multi-line text, not a
    /// key/value body; it exists for [`crate::codec::extract_dkim_key`].
    pub async fn dns_zone(&self, domain: &str) -> Result<String> {
        self.transport
            .get(
                CMD_DNS_CONTROL,
                &[("domain", domain), ("info", "no"), ("urlencoded", "yes")],
            )
            .await
    }

    /// Mint a one-time, IP-bound login key for webmail single sign-on.
    ///
    /// The key may be used any number of times until expiry but is cleared
    /// after its first login; it cannot mint further keys.
    pub async fn create_login_key(&self, request: &LoginKeyRequest) -> Result<()> {
        let expiry = request.expiry_timestamp.to_string();
        let body = self
            .transport
            .post(
                CMD_LOGIN_KEYS,
                &[
                    ("action", "create"),
                    ("keyname", &request.key_name),
                    ("key", &request.key),
                    ("key2", &request.key),
                    ("never_expires", "no"),
                    ("expiry_timestamp", &expiry),
                    ("max_uses", "0"),
                    ("clear_key", "yes"),
                    ("allow_htm", "yes"),
                    ("passwd", &request.passwd),
                    ("select_deny0", "CMD_LOGIN_KEYS"),
                    ("ips", &request.ip),
                ],
            )
            .await?;
        ApiResponse::parse(&body).into_success(CMD_LOGIN_KEYS)?;
        Ok(())
    }
}
