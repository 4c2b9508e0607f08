//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export the client error type
pub use mxpanel_client::ClientError;

/// Core layer error type.
///
/// Business outcomes (invalid names, conflicts, the last-domain rule) are
/// not errors — each operation returns them in its own outcome enum. This
/// type covers the paths where the operation itself could not run: the
/// caller is not the account's owner, a record is missing, or the panel
/// client failed.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The caller does not own the target account (or it does not exist;
    /// the two are indistinguishable on purpose).
    #[error("Access to account {0} denied")]
    Denied(String),

    /// An account references a server record that is missing.
    #[error("Server not found: {0}")]
    ServerNotFound(String),

    /// Repository/storage layer error.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Panel client error (transport, protocol, or remote command failure).
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether this is expected behavior (authorization refusal, remote
    /// business rejection) used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Denied(_) => true,
            Self::Client(e) => e.is_expected(),
            Self::ServerNotFound(_) | Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_is_expected() {
        assert!(CoreError::Denied("acc1".into()).is_expected());
    }

    #[test]
    fn missing_server_is_not_expected() {
        assert!(!CoreError::ServerNotFound("srv1".into()).is_expected());
    }

    #[test]
    fn client_classification_is_forwarded() {
        let rejected = CoreError::Client(ClientError::CommandFailed {
            command: "CMD_API_POP".into(),
            details: "no".into(),
        });
        assert!(rejected.is_expected());

        let network = CoreError::Client(ClientError::Network { detail: "x".into() });
        assert!(!network.is_expected());
    }

    #[test]
    fn denied_does_not_reveal_existence() {
        let e = CoreError::Denied("acc9".into());
        assert_eq!(e.to_string(), "Access to account acc9 denied");
    }
}
