//! Decoding of control-panel response bodies.
//!
//! The panel replies with URL-encoded `key=value&...` strings. List-valued
//! fields arrive as repeated array-style keys (`list[]=a&list[]=b`). Success
//! and failure share the same shape: `error=1` plus a human-readable
//! `details` field signals a rejected command.
//!
//! The one exception is the DNS zone dump used for DKIM lookup, which is
//! multi-line text and gets its own positional parser ([`extract_dkim_key`]).

use std::collections::HashMap;

use crate::error::{ClientError, Result};

/// Fallback failure text when the panel sets `error=1` without any detail.
const UNSPECIFIED_FAILURE: &str = "the panel reported a failure without details";

/// A decoded control-panel response.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    fields: HashMap<String, String>,
    list: Vec<String>,
}

impl ApiResponse {
    /// Decode a raw response body.
    ///
    /// Pairs are split on `&`, keys and values URL-decoded independently.
    /// Array-style keys (`list[]`, `list[0]`, ...) accumulate into the
    /// ordered [`list`](Self::list); for repeated scalar keys the last
    /// occurrence wins, matching the legacy decoder the panel's own clients
    /// use. A pair without `=` decodes to a key with an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut fields = HashMap::new();
        let mut list = Vec::new();

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = url_decode(raw_key);
            let value = url_decode(raw_value);

            match key.find('[') {
                Some(idx) if &key[..idx] == "list" => list.push(value),
                Some(idx) => {
                    let base = key[..idx].to_string();
                    fields.insert(base, value);
                }
                None => {
                    fields.insert(key, value);
                }
            }
        }

        Self { fields, list }
    }

    /// Look up a scalar field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up a scalar field that the protocol requires to be present.
    pub fn field(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ClientError::MalformedResponse {
            detail: format!("missing field: {key}"),
        })
    }

    /// Ordered values of the array-style `list` field (empty if absent).
    #[must_use]
    pub fn list(&self) -> &[String] {
        &self.list
    }

    /// Whether the panel flagged this response as a failure (`error=1`).
    ///
    /// An absent `error` field or `error=0` both mean success.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.get("error") == Some("1")
    }

    /// The panel's failure explanation.
    ///
    /// Prefers `details`, falls back to `text`, then to a fixed message so a
    /// failure is never silently reported as empty.
    #[must_use]
    pub fn details(&self) -> String {
        self.get("details")
            .or_else(|| self.get("text"))
            .filter(|s| !s.is_empty())
            .unwrap_or(UNSPECIFIED_FAILURE)
            .to_string()
    }

    /// Convert a decoded response into `Ok(self)` or the command's failure.
    pub fn into_success(self, command: &str) -> Result<Self> {
        if self.is_error() {
            return Err(ClientError::CommandFailed {
                command: command.to_string(),
                details: self.details(),
            });
        }
        Ok(self)
    }
}

fn url_decode(s: &str) -> String {
    urlencoding::decode(s).map_or_else(|_| s.to_string(), std::borrow::Cow::into_owned)
}

/// Extract the DKIM public key material from a DNS zone dump.
///
/// The zone dump is positional: the DKIM TXT record sits on the sixth line
/// (index 5), with the key material quoted after the `domainkey=` marker.
/// Returns the content between the wrapping quotes, or `None` when the body
/// has fewer than six lines, the marker is absent, the quoting is
/// unterminated, or the quoted content is empty. `None` means the zone dump
/// was not in the expected shape — it is never a valid "empty key".
#[must_use]
pub fn extract_dkim_key(zone: &str) -> Option<String> {
    let line = zone.lines().nth(5)?;
    let rest = &line[line.find("domainkey=")? + "domainkey=".len()..];
    let after_open = &rest[rest.find('"')? + 1..];
    let key = &after_open[..after_open.find('"')?];
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
