use serde::{Deserialize, Serialize};

/// Unified error type for control-panel client operations.
///
/// Variants carry whatever context the failing layer had available. All
/// variants are serializable for structured error reporting.
///
/// Network-level failures (`Network`, `Timeout`) are fatal for the issuing
/// operation: the client never retries on its own. The remote protocol
/// assumes at-most-once delivery, so any retry policy belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, 5xx from the panel).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The panel rejected the login identity or API key (HTTP 401/403).
    InvalidCredentials {
        /// Response body, if one was readable.
        raw_message: Option<String>,
    },

    /// The panel reported `error=1` for a command.
    CommandFailed {
        /// Command path that failed (e.g. `CMD_API_POP`).
        command: String,
        /// The panel's `details` text, verbatim.
        details: String,
    },

    /// The response body did not have the expected shape (missing required
    /// field, undecodable pair, malformed zone dump).
    MalformedResponse {
        /// Details about what was missing or unparseable.
        detail: String,
    },
}

impl ClientError {
    /// Whether this is expected behavior (remote business rejection) rather
    /// than an infrastructure fault, for log level classification.
    ///
    /// Log at `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::CommandFailed { .. })
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::CommandFailed { command, details } => {
                write!(f, "{command} failed: {details}")
            }
            Self::MalformedResponse { detail } => {
                write!(f, "Malformed response: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
