//! Panel session construction seam.

use std::sync::Arc;

use mxpanel_client::{HttpsTransport, LoginIdentity, PanelApi, SessionConfig};
use serde::{Deserialize, Serialize};

use crate::types::{Account, Server};

/// Which identity a panel session authenticates as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionScope {
    /// The server's administrative user alone. Used for server-side reads
    /// such as usage and limit queries.
    Server,
    /// The administrative user impersonating the target account
    /// (`owner|account`). Used for everything that acts inside the
    /// account's boundary.
    SubAccount,
}

/// Builds one panel session per logical operation.
///
/// Implementations must not cache credentials or sessions beyond the
/// returned value's lifetime; each operation opens its own session and
/// discards it.
pub trait SessionFactory: Send + Sync {
    /// Open a session against `server` scoped per `scope`.
    fn open(&self, server: &Server, account: &Account, scope: SessionScope) -> PanelApi;
}

/// Production factory: one [`HttpsTransport`] per call.
pub struct HttpsSessionFactory;

impl SessionFactory for HttpsSessionFactory {
    fn open(&self, server: &Server, account: &Account, scope: SessionScope) -> PanelApi {
        let identity = match scope {
            SessionScope::Server => LoginIdentity::server(&server.username),
            SessionScope::SubAccount => {
                LoginIdentity::sub_account(&server.username, &account.username)
            }
        };
        let config = SessionConfig::new(server.hostname.clone(), identity, server.api_key.clone());
        PanelApi::new(Arc::new(HttpsTransport::new(config)))
    }
}
