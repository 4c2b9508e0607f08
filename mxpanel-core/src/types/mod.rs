//! Core data types.

mod account;
mod mailbox;
mod outcome;
mod usage;

pub use account::{Account, CallerId, Server};
pub use mailbox::{is_acceptable_local_part, is_valid_hostname, MailAddress};
pub use outcome::{
    DkimLookup, DomainCreate, DomainDelete, MailboxCreate, MailboxDelete, MailboxReset, SpfLookup,
};
pub use usage::{AccountUsage, ResourceFigures, UsagePercentages};
