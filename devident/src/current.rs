//! Process-wide device information
//!
//! The host identifiers do not change while the process runs, so the
//! device is identified once, on first access, and cached.

use std::sync::LazyLock;

use devident_types::DeviceInfo;

use crate::identifier::Identifier;

static CURRENT: LazyLock<DeviceInfo> = LazyLock::new(|| Identifier::new().identify());

static FULL_NAME: LazyLock<String> = LazyLock::new(|| current().full_name());

/// Information about the running device
///
/// Identified on the first call from any thread; later calls return the
/// same value.
pub fn current() -> &'static DeviceInfo {
    &CURRENT
}

/// Whether the running device is in the database
pub fn found() -> bool {
    current().found
}

/// Manufacturer of the running device, or `""`
pub fn manufacturer() -> &'static str {
    &current().manufacturer
}

/// Name of the running device, or `""`
pub fn name() -> &'static str {
    &current().name
}

/// Series of the running device, or `""`
pub fn series() -> &'static str {
    &current().series
}

/// Manufacturer and name separated by a space
pub fn full_name() -> &'static str {
    &FULL_NAME
}

/// JSON summary of the running device
pub fn info() -> String {
    current().to_json()
}
