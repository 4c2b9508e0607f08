//! Account and server records.

use serde::{Deserialize, Serialize};

/// The authenticated platform user an operation runs as.
///
/// Always passed explicitly; the core never reaches into an ambient session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerId(String);

impl CallerId {
    /// Wrap a platform user identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer's hosting account on one panel server.
///
/// Immutable once created; the core only ever reads these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: String,
    /// Platform user that owns the account.
    pub owner_id: String,
    /// Server the account lives on.
    pub server_id: String,
    /// The account's username on the panel.
    pub username: String,
}

/// A panel server hosting many accounts.
///
/// Immutable; carries the administrative credentials every session on this
/// server authenticates with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server ID.
    pub id: String,
    /// Panel hostname.
    pub hostname: String,
    /// Administrative username.
    pub username: String,
    /// API key paired with the administrative username.
    pub api_key: String,
}
