//! Lookup key construction
//!
//! Raw identifiers can contain anything the manufacturer chose (`-`, `+`,
//! `'`, spaces, non-ASCII) and may start with a digit. Keys are restricted
//! to identifier characters:
//!
//! 1. An empty identifier becomes [`SENTINEL`]
//! 2. A digit-led identifier gets a leading `_`
//! 3. ASCII letters and digits are kept (lowercased); every other character
//!    is replaced by its code point in lowercase hex, without padding
//!
//! ```
//! use devident_core::key;
//!
//! assert_eq!(key::sanitize("a-b"), "a2db");
//! assert_eq!(key::sanitize("9abc"), "_9abc");
//! assert_eq!(key::composite_key("a3lte", "SM-A300F"), "a3lte_sm2da300f");
//! ```

use std::fmt::Write;

use tracing::trace;

/// Key used for an empty identifier
pub const SENTINEL: &str = "UNKNOWN";

/// Separator between the device and model parts of a composite key
pub const SEPARATOR: char = '_';

/// Sanitize a raw identifier into a lookup key
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return SENTINEL.to_string();
    }

    let mut key = String::with_capacity(raw.len() + 1);

    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        key.push(SEPARATOR);
    }

    push_escaped(&mut key, raw);

    trace!(raw, key = key.as_str(), "Sanitized identifier");

    key
}

/// Key for the first lookup stage (device identifier only)
pub fn device_key(device: &str) -> String {
    sanitize(device)
}

/// Key for the second lookup stage
///
/// The model part is escaped but never gets the leading-digit underscore;
/// the separator is always present, even for an empty model.
/// An empty model yields `"<device>_"`, not the [`SENTINEL`].
pub fn composite_key(device: &str, model: &str) -> String {
    let mut key = sanitize(device);
    key.reserve(model.len() + 1);
    key.push(SEPARATOR);
    push_escaped(&mut key, model);

    trace!(device, model, key = key.as_str(), "Built composite key");

    key
}

/// Append the escaped form of `raw` to `out`
pub fn push_escaped(out: &mut String, raw: &str) {
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            // Writing into a String cannot fail
            let _ = write!(out, "{:x}", c as u32);
        }
    }
}

/// Check whether `key` is usable as a database key
///
/// Valid keys are non-empty, use only ASCII letters, digits and `_`, and do
/// not start with a digit.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == SEPARATOR)
}
