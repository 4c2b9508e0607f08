//! Domain registry service.
//!
//! Domains have no local records: the panel's list is the authoritative
//! state and is re-fetched for every check. The one rule the panel does not
//! enforce — an account keeps at least one domain — lives here.

use std::sync::Arc;

use mxpanel_client::ClientError;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::SessionScope;
use crate::types::{is_valid_hostname, Account, CallerId, DomainCreate, DomainDelete, Server};

/// Domain registry service.
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// Create a domain service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List the account's domains.
    pub async fn list(&self, caller: &CallerId, account_id: &str) -> CoreResult<Vec<String>> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let server = self.ctx.server_for(&account).await?;
        self.domains_of(&server, &account).await
    }

    /// The account's current domain list, for callers that already hold an
    /// authorized account record.
    pub(crate) async fn domains_of(
        &self,
        server: &Server,
        account: &Account,
    ) -> CoreResult<Vec<String>> {
        let api = self
            .ctx
            .open_session(server, account, SessionScope::SubAccount);
        Ok(api.show_domains().await?)
    }

    /// Add a domain to the account.
    pub async fn create(
        &self,
        caller: &CallerId,
        account_id: &str,
        domain: &str,
    ) -> CoreResult<DomainCreate> {
        let account = self.ctx.authorize(caller, account_id).await?;
        if !is_valid_hostname(domain) {
            return Ok(DomainCreate::InvalidName);
        }

        let server = self.ctx.server_for(&account).await?;
        let current = self.domains_of(&server, &account).await?;
        if current.iter().any(|d| d == domain) {
            return Ok(DomainCreate::AlreadyExists);
        }

        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        match api.create_domain(domain).await {
            Ok(()) => Ok(DomainCreate::Created),
            Err(ClientError::CommandFailed { details, .. }) => {
                Ok(DomainCreate::Rejected { details })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a domain from the account.
    ///
    /// Refused while the account holds exactly one domain, whichever domain
    /// was named.
    pub async fn delete(
        &self,
        caller: &CallerId,
        account_id: &str,
        domain: &str,
    ) -> CoreResult<DomainDelete> {
        let account = self.ctx.authorize(caller, account_id).await?;
        if !is_valid_hostname(domain) {
            return Ok(DomainDelete::InvalidName);
        }

        let server = self.ctx.server_for(&account).await?;
        let current = self.domains_of(&server, &account).await?;
        if current.len() == 1 {
            return Ok(DomainDelete::LastDomain);
        }
        if !current.iter().any(|d| d == domain) {
            return Ok(DomainDelete::NotFound);
        }

        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        match api.delete_domain(domain).await {
            Ok(()) => Ok(DomainDelete::Deleted),
            Err(ClientError::CommandFailed { details, .. }) => {
                Ok(DomainDelete::Rejected { details })
            }
            Err(e) => Err(e.into()),
        }
    }
}
