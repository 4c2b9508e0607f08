//! Usage reporting service.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::SessionScope;
use crate::types::{Account, AccountUsage, CallerId, ResourceFigures, Server, UsagePercentages};

/// Usage reporting service.
///
/// Read-only and side-effect free; safe to poll. Queries run under the
/// server's own identity (no sub-account suffix) because usage and limit
/// reports are server-side views of the account.
pub struct UsageService {
    ctx: Arc<ServiceContext>,
}

impl UsageService {
    /// Create a usage service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Current usage, limits, and percentage utilization for the account.
    pub async fn usage(&self, caller: &CallerId, account_id: &str) -> CoreResult<AccountUsage> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let server = self.ctx.server_for(&account).await?;
        self.usage_of(&server, &account).await
    }

    pub(crate) async fn usage_of(
        &self,
        server: &Server,
        account: &Account,
    ) -> CoreResult<AccountUsage> {
        let api = self.ctx.open_session(server, account, SessionScope::Server);

        let usage = ResourceFigures::from_response(&api.user_usage(&account.username).await?);
        let limits = ResourceFigures::from_response(&api.user_config(&account.username).await?);

        Ok(AccountUsage {
            percentages: UsagePercentages::compute(&usage, &limits),
            usage,
            limits,
        })
    }
}
