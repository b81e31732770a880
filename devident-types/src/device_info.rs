//! Device information structures

use std::fmt;

use serde::Serialize;

/// Resolved device information
///
/// Every field is always present; fields the database does not know about
/// are empty strings. Use [`DeviceInfo::found`] to tell an unknown device
/// apart from a known device with an unused field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeviceInfo {
    /// Whether the device was found in the database
    pub found: bool,

    /// Device manufacturer
    pub manufacturer: String,

    /// User-friendly device name
    pub name: String,

    /// Series the device belongs to, if any
    pub series: String,
}

/// Serialized form of [`DeviceInfo`]: only the non-empty fields, in order
#[derive(Serialize)]
struct Summary<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    manufacturer: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    series: &'a str,
}

impl DeviceInfo {
    /// Information for a device that is not in the database
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn new(
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            found: true,
            manufacturer: manufacturer.into(),
            name: name.into(),
            series: series.into(),
        }
    }

    /// Manufacturer and name separated by a single space
    ///
    /// For an unknown device this is `" "`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.name)
    }

    /// JSON object holding the non-empty fields
    ///
    /// Keys are `manufacturer`, `name` and `series`, in that order.
    /// Returns `"{}"` when there is nothing to report.
    pub fn to_json(&self) -> String {
        let summary = Summary {
            manufacturer: &self.manufacturer,
            name: &self.name,
            series: &self.series,
        };

        serde_json::to_string(&summary).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "{}", self.full_name())
        } else {
            write!(f, "Unknown device")
        }
    }
}
