//! Mailbox registry service.
//!
//! Addresses are `local@domain` where the domain must currently belong to
//! the account; the domain list is re-fetched from the panel for every
//! check rather than cached. Mailbox passwords are generated here, handed
//! to the caller exactly once, and never stored or logged.

use std::sync::Arc;

use mxpanel_client::ClientError;

use crate::error::CoreResult;
use crate::services::{random_hex, DomainService, ServiceContext};
use crate::traits::SessionScope;
use crate::types::{
    is_acceptable_local_part, is_valid_hostname, Account, CallerId, MailAddress, MailboxCreate,
    MailboxDelete, MailboxReset, Server,
};

/// Entropy behind each generated mailbox password (rendered as hex, so the
/// password is twice this many characters).
const PASSWORD_BYTES: usize = 7;

/// Mailbox registry service.
pub struct MailboxService {
    ctx: Arc<ServiceContext>,
    domains: DomainService,
}

impl MailboxService {
    /// Create a mailbox service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let domains = DomainService::new(Arc::clone(&ctx));
        Self { ctx, domains }
    }

    /// Every mailbox address on the account, in domain order then listing
    /// order, duplicates preserved.
    pub async fn list(&self, caller: &CallerId, account_id: &str) -> CoreResult<Vec<String>> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let server = self.ctx.server_for(&account).await?;
        self.mailboxes_of(&server, &account).await
    }

    async fn mailboxes_of(&self, server: &Server, account: &Account) -> CoreResult<Vec<String>> {
        let domains = self.domains.domains_of(server, account).await?;
        let api = self
            .ctx
            .open_session(server, account, SessionScope::SubAccount);

        let mut addresses = Vec::new();
        for domain in &domains {
            for prefix in api.list_mailboxes(domain).await? {
                addresses.push(format!("{prefix}@{domain}"));
            }
        }
        Ok(addresses)
    }

    /// Create a mailbox with a freshly generated password.
    pub async fn create(
        &self,
        caller: &CallerId,
        account_id: &str,
        domain: &str,
        local_part: &str,
    ) -> CoreResult<MailboxCreate> {
        let account = self.ctx.authorize(caller, account_id).await?;
        if !is_valid_hostname(domain) {
            return Ok(MailboxCreate::InvalidDomain);
        }

        let server = self.ctx.server_for(&account).await?;
        let owned = self.domains.domains_of(&server, &account).await?;
        if !owned.iter().any(|d| d == domain) {
            return Ok(MailboxCreate::InvalidDomain);
        }

        let address = format!("{local_part}@{domain}");
        let existing = self.mailboxes_of(&server, &account).await?;
        if existing.contains(&address) {
            return Ok(MailboxCreate::AddressTaken);
        }
        if !is_acceptable_local_part(local_part) {
            return Ok(MailboxCreate::InvalidLocalPart);
        }

        let password = random_hex(PASSWORD_BYTES);
        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        match api.create_mailbox(domain, local_part, &password).await {
            Ok(()) => Ok(MailboxCreate::Created { password }),
            Err(ClientError::CommandFailed { details, .. }) => {
                Ok(MailboxCreate::Rejected { details })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a mailbox.
    pub async fn delete(
        &self,
        caller: &CallerId,
        account_id: &str,
        address: &str,
    ) -> CoreResult<MailboxDelete> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let Some(parsed) = MailAddress::parse(address) else {
            return Ok(MailboxDelete::InvalidAddress);
        };
        if !is_valid_hostname(parsed.domain()) {
            return Ok(MailboxDelete::InvalidDomain);
        }

        let server = self.ctx.server_for(&account).await?;
        let owned = self.domains.domains_of(&server, &account).await?;
        if !owned.iter().any(|d| d == parsed.domain()) {
            return Ok(MailboxDelete::DomainNotFound);
        }
        let existing = self.mailboxes_of(&server, &account).await?;
        if !existing.iter().any(|a| a == address) {
            return Ok(MailboxDelete::AddressNotFound);
        }

        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        match api
            .delete_mailbox(parsed.domain(), parsed.local_part())
            .await
        {
            Ok(()) => Ok(MailboxDelete::Deleted),
            Err(ClientError::CommandFailed { details, .. }) => {
                Ok(MailboxDelete::Rejected { details })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace a mailbox's password with a freshly generated one.
    ///
    /// Validation is identical to [`delete`](Self::delete).
    pub async fn reset_password(
        &self,
        caller: &CallerId,
        account_id: &str,
        address: &str,
    ) -> CoreResult<MailboxReset> {
        let account = self.ctx.authorize(caller, account_id).await?;
        let Some(parsed) = MailAddress::parse(address) else {
            return Ok(MailboxReset::InvalidAddress);
        };
        if !is_valid_hostname(parsed.domain()) {
            return Ok(MailboxReset::InvalidDomain);
        }

        let server = self.ctx.server_for(&account).await?;
        let owned = self.domains.domains_of(&server, &account).await?;
        if !owned.iter().any(|d| d == parsed.domain()) {
            return Ok(MailboxReset::DomainNotFound);
        }
        let existing = self.mailboxes_of(&server, &account).await?;
        if !existing.iter().any(|a| a == address) {
            return Ok(MailboxReset::AddressNotFound);
        }

        let password = random_hex(PASSWORD_BYTES);
        let api = self
            .ctx
            .open_session(&server, &account, SessionScope::SubAccount);
        match api
            .set_mailbox_password(parsed.domain(), parsed.local_part(), &password)
            .await
        {
            Ok(()) => Ok(MailboxReset::Reset { password }),
            Err(ClientError::CommandFailed { details, .. }) => {
                Ok(MailboxReset::Rejected { details })
            }
            Err(e) => Err(e.into()),
        }
    }
}
