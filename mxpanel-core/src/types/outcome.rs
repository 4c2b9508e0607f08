//! Per-operation outcome types.
//!
//! Every mutating operation returns a closed enum: one success variant with
//! its payload, one variant per named business failure, and a `Rejected`
//! variant carrying the panel's `details` text verbatim. Authorization and
//! infrastructure failures travel separately as
//! [`CoreError`](crate::error::CoreError).
//!
//! The self-service layer this core replaced encoded these outcomes as small
//! negative integer strings. Callers that still speak that surface can use
//! the `legacy_code` methods; nothing inside the core branches on them.

use serde::{Deserialize, Serialize};

/// Outcome of creating a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DomainCreate {
    /// Domain created on the panel.
    Created,
    /// The name is empty or not a valid hostname.
    InvalidName,
    /// The account already has this domain.
    AlreadyExists,
    /// The panel refused the creation.
    Rejected {
        /// The panel's explanation, verbatim.
        details: String,
    },
}

impl DomainCreate {
    /// The legacy integer-string surface (`0`, `-2`, `-3`, or the panel's
    /// details text for a remote refusal).
    #[must_use]
    pub fn legacy_code(&self) -> String {
        match self {
            Self::Created => "0".to_string(),
            Self::InvalidName => "-2".to_string(),
            Self::AlreadyExists => "-3".to_string(),
            Self::Rejected { details } => details.clone(),
        }
    }
}

/// Outcome of deleting a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DomainDelete {
    /// Domain deleted on the panel.
    Deleted,
    /// The name is empty or not a valid hostname.
    InvalidName,
    /// The account does not have this domain.
    NotFound,
    /// The account's only domain cannot be deleted.
    LastDomain,
    /// The panel refused the deletion.
    Rejected {
        /// The panel's explanation, verbatim.
        details: String,
    },
}

impl DomainDelete {
    /// The legacy integer-string surface (`0`, `-2`, `-3`, `-5`, or the
    /// panel's details text).
    #[must_use]
    pub fn legacy_code(&self) -> String {
        match self {
            Self::Deleted => "0".to_string(),
            Self::InvalidName => "-2".to_string(),
            Self::NotFound => "-3".to_string(),
            Self::LastDomain => "-5".to_string(),
            Self::Rejected { details } => details.clone(),
        }
    }
}

/// Outcome of creating a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MailboxCreate {
    /// Mailbox created; the generated password is shown to the caller
    /// exactly once and stored nowhere.
    Created {
        /// The generated mailbox password.
        password: String,
    },
    /// The domain is empty, malformed, or not one of the account's domains.
    InvalidDomain,
    /// The composed address already exists on the account.
    AddressTaken,
    /// The local part contains a forbidden character.
    InvalidLocalPart,
    /// The panel refused the creation.
    Rejected {
        /// The panel's explanation, verbatim.
        details: String,
    },
}

impl MailboxCreate {
    /// The legacy surface: the password on success, otherwise `-2`, `-3`,
    /// `-4`, or `-5` for a remote refusal.
    #[must_use]
    pub fn legacy_code(&self) -> String {
        match self {
            Self::Created { password } => password.clone(),
            Self::InvalidDomain => "-2".to_string(),
            Self::AddressTaken => "-3".to_string(),
            Self::InvalidLocalPart => "-4".to_string(),
            Self::Rejected { .. } => "-5".to_string(),
        }
    }
}

/// Outcome of deleting a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MailboxDelete {
    /// Mailbox deleted on the panel.
    Deleted,
    /// The address is not shaped `local@domain`.
    InvalidAddress,
    /// The address's domain is not a valid hostname.
    InvalidDomain,
    /// The address's domain is not one of the account's domains.
    DomainNotFound,
    /// No such mailbox on the account.
    AddressNotFound,
    /// The panel refused the deletion.
    Rejected {
        /// The panel's explanation, verbatim.
        details: String,
    },
}

impl MailboxDelete {
    /// The legacy integer-string surface (`0`, `-5`, `-2`, `-3`, `-4`, or
    /// the panel's details text).
    #[must_use]
    pub fn legacy_code(&self) -> String {
        match self {
            Self::Deleted => "0".to_string(),
            Self::InvalidAddress => "-5".to_string(),
            Self::InvalidDomain => "-2".to_string(),
            Self::DomainNotFound => "-3".to_string(),
            Self::AddressNotFound => "-4".to_string(),
            Self::Rejected { details } => details.clone(),
        }
    }
}

/// Outcome of resetting a mailbox password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MailboxReset {
    /// Password replaced; the new one is shown exactly once.
    Reset {
        /// The newly generated mailbox password.
        password: String,
    },
    /// The address is not shaped `local@domain`.
    InvalidAddress,
    /// The address's domain is not a valid hostname.
    InvalidDomain,
    /// The address's domain is not one of the account's domains.
    DomainNotFound,
    /// No such mailbox on the account.
    AddressNotFound,
    /// The panel refused the reset.
    Rejected {
        /// The panel's explanation, verbatim.
        details: String,
    },
}

impl MailboxReset {
    /// The legacy surface: the new password on success, otherwise `-5`,
    /// `-2`, `-3`, `-4`, or `-6` for a remote refusal.
    #[must_use]
    pub fn legacy_code(&self) -> String {
        match self {
            Self::Reset { password } => password.clone(),
            Self::InvalidAddress => "-5".to_string(),
            Self::InvalidDomain => "-2".to_string(),
            Self::DomainNotFound => "-3".to_string(),
            Self::AddressNotFound => "-4".to_string(),
            Self::Rejected { .. } => "-6".to_string(),
        }
    }
}

/// Outcome of a DKIM key lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DkimLookup {
    /// The domain's DKIM public key material.
    Found {
        /// Raw key material, quotes stripped.
        key: String,
    },
    /// No domain was given.
    EmptyDomain,
    /// The domain is not one of the account's domains.
    WrongOwner,
    /// The zone dump was not in the expected shape. Deliberately distinct
    /// from `Found` with an empty key, which this core never produces.
    MalformedZone,
}

/// Outcome of an SPF policy lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SpfLookup {
    /// The deployment's SPF policy for this domain.
    Found {
        /// Policy string.
        policy: String,
    },
    /// No domain was given.
    EmptyDomain,
    /// The domain is not one of the account's domains.
    WrongOwner,
}
