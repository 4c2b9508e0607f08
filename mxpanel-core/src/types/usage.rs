//! Usage and limit figures and their percentage view.

use mxpanel_client::ApiResponse;
use serde::{Deserialize, Serialize};

/// Raw figures for one account across the panel's resource dimensions.
///
/// Used for both current usage and configured limits — the panel reports
/// them with the same field names. Absent or non-numeric figures (the panel
/// reports `unlimited` for uncapped limits) read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFigures {
    /// Disk quota, in the panel's storage unit.
    pub disk_quota: u64,
    /// Forwarder count.
    pub forwarders: u64,
    /// Mailbox count.
    pub mailboxes: u64,
    /// Domain count.
    pub domains: u64,
    /// Subdomain count.
    pub subdomains: u64,
}

impl ResourceFigures {
    /// Read the panel's field names out of a decoded response.
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        Self {
            disk_quota: numeric_field(response, "quota"),
            forwarders: numeric_field(response, "nemailf"),
            mailboxes: numeric_field(response, "nemails"),
            domains: numeric_field(response, "vdomains"),
            subdomains: numeric_field(response, "nsubdomains"),
        }
    }
}

fn numeric_field(response: &ApiResponse, key: &str) -> u64 {
    response
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Percentage utilization per resource dimension, two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsagePercentages {
    /// Disk quota utilization.
    pub disk_quota: f64,
    /// Forwarder utilization.
    pub forwarders: f64,
    /// Mailbox utilization.
    pub mailboxes: f64,
    /// Domain utilization.
    pub domains: f64,
    /// Subdomain utilization.
    pub subdomains: f64,
}

impl UsagePercentages {
    /// Compute utilization from usage and limit figures.
    ///
    /// A zero (or unlimited, which reads as zero) limit yields exactly
    /// `0.0` for that dimension — never a division by zero.
    #[must_use]
    pub fn compute(usage: &ResourceFigures, limits: &ResourceFigures) -> Self {
        Self {
            disk_quota: percentage(usage.disk_quota, limits.disk_quota),
            forwarders: percentage(usage.forwarders, limits.forwarders),
            mailboxes: percentage(usage.mailboxes, limits.mailboxes),
            domains: percentage(usage.domains, limits.domains),
            subdomains: percentage(usage.subdomains, limits.subdomains),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(usage: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (usage as f64 / limit as f64 * 10_000.0).round() / 100.0
}

/// Everything the panel knows about one account's consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUsage {
    /// Percentage view of the figures below.
    pub percentages: UsagePercentages,
    /// Current usage.
    pub usage: ResourceFigures,
    /// Configured limits.
    pub limits: ResourceFigures,
}
