//! Account listing and overview service.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::services::{ServiceContext, UsageService};
use crate::types::{Account, CallerId, ResourceFigures};

/// Usage snapshot for one hosting server, taken through the first of the
/// caller's accounts on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerUsage {
    /// Panel hostname.
    pub hostname: String,
    /// Current usage.
    pub usage: ResourceFigures,
    /// Configured limits.
    pub limits: ResourceFigures,
}

/// A caller's accounts plus per-server usage snapshots, keyed by server ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOverview {
    /// The caller's accounts.
    pub accounts: Vec<Account>,
    /// One snapshot per distinct server the accounts live on.
    pub servers: HashMap<String, ServerUsage>,
}

/// Account listing and overview service.
pub struct AccountService {
    ctx: Arc<ServiceContext>,
    usage: UsageService,
}

impl AccountService {
    /// Create an account service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let usage = UsageService::new(Arc::clone(&ctx));
        Self { ctx, usage }
    }

    /// All accounts owned by the caller.
    pub async fn list(&self, caller: &CallerId) -> CoreResult<Vec<Account>> {
        self.ctx
            .account_repository
            .find_by_owner(caller.as_str())
            .await
    }

    /// The caller's accounts with a usage snapshot per distinct server.
    ///
    /// Each server is queried once, however many of the caller's accounts
    /// live on it.
    pub async fn overview(&self, caller: &CallerId) -> CoreResult<PanelOverview> {
        let accounts = self.list(caller).await?;

        let mut servers = HashMap::new();
        for account in &accounts {
            if servers.contains_key(&account.server_id) {
                continue;
            }
            let server = self.ctx.server_for(account).await?;
            let usage = self.usage.usage_of(&server, account).await?;
            servers.insert(
                account.server_id.clone(),
                ServerUsage {
                    hostname: server.hostname,
                    usage: usage.usage,
                    limits: usage.limits,
                },
            );
        }

        Ok(PanelOverview { accounts, servers })
    }
}
