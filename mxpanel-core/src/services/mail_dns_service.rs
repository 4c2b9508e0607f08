//! DKIM key lookup and SPF policy service.

use std::sync::Arc;

use mxpanel_client::extract_dkim_key;

use crate::error::CoreResult;
use crate::services::{DomainService, ServiceContext};
use crate::traits::SessionScope;
use crate::types::{CallerId, DkimLookup, SpfLookup};

/// Mail-related DNS information service.
pub struct MailDnsService {
    ctx: Arc<ServiceContext>,
    domains: DomainService,
}

impl MailDnsService {
    /// Create a mail DNS service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let domains = DomainService::new(Arc::clone(&ctx));
        Self { ctx, domains }
    }

    /// Fetch the domain's DKIM public key from its zone dump.
    ///
    /// A zone dump the parser cannot read comes back as
    /// [`DkimLookup::MalformedZone`]; there is no "empty key" success.
    pub async fn dkim_key(
        &self,
        caller: &CallerId,
        account_id: &str,
        domain: &str,
    ) -> CoreResult<DkimLookup> {
        let account = self.ctx.authorize(caller, account_id).await?;
        if domain.is_empty() {
            return Ok(DkimLookup::EmptyDomain);
        }

        let server = self.ctx.server_for(&account).await?;
        let owned = self.domains.domains_of(&server, &account).await?;
        if !owned.iter().any(|d| d == domain) {
            return Ok(DkimLookup::WrongOwner);
        }

        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        let zone = api.dns_zone(domain).await?;

        match extract_dkim_key(&zone) {
            Some(key) => Ok(DkimLookup::Found { key }),
            None => {
                log::warn!("unreadable zone dump for {domain}");
                Ok(DkimLookup::MalformedZone)
            }
        }
    }

    /// The SPF policy published for the domain.
    ///
    /// The policy is deployment-wide configuration; only the ownership
    /// check touches the panel.
    pub async fn spf_policy(
        &self,
        caller: &CallerId,
        account_id: &str,
        domain: &str,
    ) -> CoreResult<SpfLookup> {
        let account = self.ctx.authorize(caller, account_id).await?;
        if domain.is_empty() {
            return Ok(SpfLookup::EmptyDomain);
        }

        let server = self.ctx.server_for(&account).await?;
        let owned = self.domains.domains_of(&server, &account).await?;
        if !owned.iter().any(|d| d == domain) {
            return Ok(SpfLookup::WrongOwner);
        }

        Ok(SpfLookup::Found {
            policy: self.ctx.config.spf_policy.clone(),
        })
    }
}
