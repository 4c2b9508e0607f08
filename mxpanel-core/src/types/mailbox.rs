//! Mail address parsing and name syntax validation.

use serde::{Deserialize, Serialize};

/// Characters that may never appear in a mailbox local part.
///
/// This is the panel's own rejection set, enforced locally so a bad name
/// never costs a round-trip.
const FORBIDDEN_LOCAL_CHARS: &[char] = &[
    '\'', '^', '£', '$', '%', '&', '*', '(', ')', '}', '{', '@', '#', '~', '?', '>', '<', ',',
    '|', '=', '+', '¬',
];

/// Longest hostname the panel accepts.
const MAX_HOSTNAME_LEN: usize = 253;
/// Longest single label within a hostname.
const MAX_LABEL_LEN: usize = 63;

/// A mailbox address split into its two halves.
///
/// Parsing enforces shape only (`local@domain`, both halves non-empty);
/// whether the domain belongs to an account is the registry's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAddress {
    local_part: String,
    domain: String,
}

impl MailAddress {
    /// Parse `local@domain`.
    ///
    /// Returns `None` for zero or more than one `@`, or when either half is
    /// empty.
    #[must_use]
    pub fn parse(address: &str) -> Option<Self> {
        let (local_part, domain) = address.split_once('@')?;
        if local_part.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        Some(Self {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        })
    }

    /// The part before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl std::fmt::Display for MailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// Whether `name` is a syntactically valid hostname.
///
/// Labels are 1–63 ASCII alphanumeric/hyphen characters with no leading or
/// trailing hyphen, joined by dots, 253 characters total. A single label
/// passes; the panel itself decides what it will actually host.
#[must_use]
pub fn is_valid_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Whether a mailbox local part avoids the panel's forbidden characters.
#[must_use]
pub fn is_acceptable_local_part(local_part: &str) -> bool {
    !local_part.chars().any(|c| FORBIDDEN_LOCAL_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_address() {
        let addr = MailAddress::parse("info@example.com").unwrap();
        assert_eq!(addr.local_part(), "info");
        assert_eq!(addr.domain(), "example.com");
        assert_eq!(addr.to_string(), "info@example.com");
    }

    #[test]
    fn parse_rejects_missing_at() {
        assert!(MailAddress::parse("example.com").is_none());
    }

    #[test]
    fn parse_rejects_two_ats() {
        assert!(MailAddress::parse("a@b@c.com").is_none());
    }

    #[test]
    fn parse_rejects_empty_halves() {
        assert!(MailAddress::parse("@example.com").is_none());
        assert!(MailAddress::parse("info@").is_none());
        assert!(MailAddress::parse("@").is_none());
    }

    #[test]
    fn hostname_accepts_normal_domains() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("mail.example.co.uk"));
        assert!(is_valid_hostname("xn--bcher-kva.example"));
        assert!(is_valid_hostname("localhost"));
    }

    #[test]
    fn hostname_rejects_empty_and_bad_labels() {
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("exa mple.com"));
        assert!(!is_valid_hostname("example..com"));
        assert!(!is_valid_hostname(".example.com"));
        assert!(!is_valid_hostname("example.com."));
        assert!(!is_valid_hostname("-example.com"));
        assert!(!is_valid_hostname("example-.com"));
        assert!(!is_valid_hostname("exam_ple.com"));
    }

    #[test]
    fn hostname_rejects_oversized_names() {
        let label = "a".repeat(64);
        assert!(!is_valid_hostname(&label));
        let long = format!("{}.com", "a.".repeat(130));
        assert!(!is_valid_hostname(&long));
    }

    #[test]
    fn local_part_rejects_each_forbidden_char() {
        for c in FORBIDDEN_LOCAL_CHARS {
            let candidate = format!("user{c}name");
            assert!(
                !is_acceptable_local_part(&candidate),
                "expected rejection for {c:?}"
            );
        }
    }

    #[test]
    fn local_part_accepts_common_names() {
        assert!(is_acceptable_local_part("info"));
        assert!(is_acceptable_local_part("first.last"));
        assert!(is_acceptable_local_part("sales-team_2"));
    }
}
