//! Business logic service layer.
//!
//! Every operation follows the same shape: authorize the caller against the
//! account record, open one short-lived panel session, issue the commands,
//! decode, return a typed outcome. Sessions are not pooled or shared;
//! nothing here holds mutable state across calls.
//!
//! Existence pre-checks (domain membership, address uniqueness, the
//! last-domain rule) read a freshly fetched list and are therefore
//! check-then-act: two concurrent mutations against the same account can
//! race between the read and the write. The panel is the source of truth
//! and rejects genuinely conflicting mutations itself — the pre-checks
//! exist to avoid pointless round-trips and to give callers precise
//! outcomes, not to serialize writers.

mod account_service;
mod domain_service;
mod mail_dns_service;
mod mailbox_service;
mod sso_service;
mod usage_service;

pub use account_service::{AccountService, PanelOverview, ServerUsage};
pub use domain_service::DomainService;
pub use mail_dns_service::MailDnsService;
pub use mailbox_service::MailboxService;
pub use sso_service::{SsoService, SsoTicket};
pub use usage_service::UsageService;

use std::sync::Arc;

use mxpanel_client::PanelApi;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountRepository, ServerRepository, SessionFactory, SessionScope};
use crate::types::{Account, CallerId, Server};

/// Service context - holds all dependencies.
///
/// The hosting application creates this once, injecting its storage
/// implementations and (in production) [`crate::traits::HttpsSessionFactory`].
pub struct ServiceContext {
    /// Account record repository.
    pub account_repository: Arc<dyn AccountRepository>,
    /// Server record repository.
    pub server_repository: Arc<dyn ServerRepository>,
    /// Panel session builder.
    pub session_factory: Arc<dyn SessionFactory>,
    /// Deployment configuration.
    pub config: CoreConfig,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        server_repository: Arc<dyn ServerRepository>,
        session_factory: Arc<dyn SessionFactory>,
        config: CoreConfig,
    ) -> Self {
        Self {
            account_repository,
            server_repository,
            session_factory,
            config,
        }
    }

    /// The authorization gate: load the account and confirm `caller` owns
    /// it, before anything touches the panel.
    ///
    /// A missing account and a foreign account both come back as
    /// [`CoreError::Denied`] so callers cannot probe for account IDs.
    pub async fn authorize(&self, caller: &CallerId, account_id: &str) -> CoreResult<Account> {
        match self.account_repository.find_by_id(account_id).await? {
            Some(account) if account.owner_id == caller.as_str() => Ok(account),
            _ => {
                log::warn!("caller {caller} denied access to account {account_id}");
                Err(CoreError::Denied(account_id.to_string()))
            }
        }
    }

    /// Resolve the server an account lives on.
    pub async fn server_for(&self, account: &Account) -> CoreResult<Server> {
        self.server_repository
            .find_by_id(&account.server_id)
            .await?
            .ok_or_else(|| CoreError::ServerNotFound(account.server_id.clone()))
    }

    /// Open a panel session for one logical operation.
    pub(crate) fn open_session(
        &self,
        server: &Server,
        account: &Account,
        scope: SessionScope,
    ) -> PanelApi {
        self.session_factory.open(server, account, scope)
    }
}

/// Render `bytes` cryptographically random bytes as lowercase hex.
///
/// Used for mailbox passwords and SSO key material, which are live
/// credentials and must come from the OS entropy source.
pub(crate) fn random_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hex_has_requested_length_and_charset() {
        let s = random_hex(7);
        assert_eq!(s.len(), 14);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn random_hex_does_not_repeat() {
        // Collision over 10 bytes of entropy would indicate a broken source.
        assert_ne!(random_hex(10), random_hex(10));
    }
}
