//! mxpanel Core Library
//!
//! Orchestration core for a self-service mail and domain panel backed by a
//! DirectAdmin-compatible control panel:
//! - Authorization gate (caller must own the account record)
//! - Domain registry (list / create / delete, last-domain rule)
//! - Mailbox registry (list / create / delete / password reset)
//! - Usage reporting with percentage utilization
//! - DKIM key and SPF policy lookup
//! - Webmail single-sign-on key issuing
//!
//! The library is presentation- and storage-independent: account and server
//! records arrive through repository traits, and panel sessions are built
//! through a factory seam so tests can run against an in-memory panel.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::CoreConfig;
pub use error::{ClientError, CoreError, CoreResult};
pub use services::{
    AccountService, DomainService, MailDnsService, MailboxService, ServiceContext, SsoService,
    SsoTicket, UsageService,
};
pub use traits::{
    AccountRepository, HttpsSessionFactory, ServerRepository, SessionFactory, SessionScope,
};
pub use types::{Account, CallerId, Server};
