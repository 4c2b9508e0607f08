//! Log sanitization helpers.
//!
//! Response bodies can be large (zone dumps) or sensitive (key material), so
//! debug logging always goes through [`truncate_for_log`].

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for safe logging.
///
/// Bodies within the limit pass through unchanged; longer ones are cut at
/// the nearest character boundary at or below the limit, with the total size
/// appended.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while cut > 0 && !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
