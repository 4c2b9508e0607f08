//! HTTPS transport to the control panel's administrative port.
//!
//! The panel speaks plain HTTPS on a fixed administrative port (2222) with a
//! per-request basic-auth credential pair; there is no application-level
//! handshake or session state. Each [`HttpsTransport`] is scoped to one
//! server and one login identity and is meant to live for a single logical
//! operation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::utils::truncate_for_log;

/// The panel's fixed administrative port.
pub const DEFAULT_ADMIN_PORT: u16 = 2222;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The identity a session authenticates as.
///
/// Server scope acts on the whole hosting server; sub-account scope uses the
/// panel's composite `owner|account` login to act inside one hosting
/// account's boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentity {
    /// The server's administrative user.
    Server {
        /// Administrative username.
        username: String,
    },
    /// The administrative user impersonating one hosting account.
    SubAccount {
        /// Administrative username.
        username: String,
        /// Hosting account username.
        account: String,
    },
}

impl LoginIdentity {
    /// Server-scope identity.
    pub fn server(username: impl Into<String>) -> Self {
        Self::Server {
            username: username.into(),
        }
    }

    /// Sub-account-scope identity (`owner|account`).
    pub fn sub_account(username: impl Into<String>, account: impl Into<String>) -> Self {
        Self::SubAccount {
            username: username.into(),
            account: account.into(),
        }
    }

    /// The login string sent to the panel.
    #[must_use]
    pub fn as_login(&self) -> String {
        match self {
            Self::Server { username } => username.clone(),
            Self::SubAccount { username, account } => format!("{username}|{account}"),
        }
    }
}

impl std::fmt::Display for LoginIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_login())
    }
}

/// Connection parameters for one panel session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Panel hostname (no scheme, no port).
    pub hostname: String,
    /// Administrative port.
    pub port: u16,
    /// Login identity for every request in this session.
    pub identity: LoginIdentity,
    /// API key paired with the identity.
    pub api_key: String,
}

impl SessionConfig {
    /// Session config on the default administrative port.
    pub fn new(
        hostname: impl Into<String>,
        identity: LoginIdentity,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_ADMIN_PORT,
            identity,
            api_key: api_key.into(),
        }
    }
}

/// Raw request/response access to the panel.
///
/// `command` is a command path beginning `/CMD_API_`; reads go out as GET
/// with query parameters, writes as POST with a form-encoded body. Both
/// return the raw response body for the codec to decode.
///
/// Implementations never retry: the panel's command protocol is assumed
/// at-most-once, and a transient failure must surface to the caller intact.
#[async_trait]
pub trait PanelTransport: Send + Sync {
    /// Issue a read command.
    async fn get(&self, command: &str, query: &[(&str, &str)]) -> Result<String>;

    /// Issue a write command.
    async fn post(&self, command: &str, form: &[(&str, &str)]) -> Result<String>;
}

/// Production [`PanelTransport`] over TLS.
pub struct HttpsTransport {
    client: Client,
    base_url: String,
    login: String,
    api_key: String,
}

impl HttpsTransport {
    /// Open a transport for the given session.
    ///
    /// No connection is established here; credentials are sent per request.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            client: create_http_client(),
            base_url: format!("https://{}:{}", config.hostname, config.port),
            login: config.identity.as_login(),
            api_key: config.api_key,
        }
    }

    async fn execute(&self, builder: reqwest::RequestBuilder, command: &str) -> Result<String> {
        let response = builder
            .basic_auth(&self.login, Some(&self.api_key))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ClientError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        log::debug!("{command} -> HTTP {status}");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            log::warn!("{command} rejected: HTTP {status}");
            return Err(ClientError::InvalidCredentials { raw_message: body });
        }

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{command} server error: HTTP {status}");
            return Err(ClientError::Network {
                detail: format!("HTTP {status}: {body}"),
            });
        }

        let body = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("{command} body: {}", truncate_for_log(&body));

        Ok(body)
    }
}

#[async_trait]
impl PanelTransport for HttpsTransport {
    async fn get(&self, command: &str, query: &[(&str, &str)]) -> Result<String> {
        log::debug!("GET {command}");
        let builder = self
            .client
            .get(format!("{}{command}", self.base_url))
            .query(query);
        self.execute(builder, command).await
    }

    async fn post(&self, command: &str, form: &[(&str, &str)]) -> Result<String> {
        // Form contents may carry credential material, so only the command
        // path is logged.
        log::debug!("POST {command}");
        let builder = self
            .client
            .post(format!("{}{command}", self.base_url))
            .form(form);
        self.execute(builder, command).await
    }
}

/// Create an HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
