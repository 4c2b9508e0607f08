//! Deployment configuration injected into the service context.

use serde::{Deserialize, Serialize};

/// SPF policy handed out when a deployment configures none.
pub const DEFAULT_SPF_POLICY: &str = "v=spf1 include:mxlogin.com -all";

/// Per-deployment configuration.
///
/// The core never reads the environment itself; whatever hosts it resolves
/// configuration and passes the result in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// The SPF policy string published for every hosted domain.
    pub spf_policy: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            spf_policy: DEFAULT_SPF_POLICY.to_string(),
        }
    }
}
