//! Device record parsing
//!
//! A record is a `|`-delimited field list:
//!
//! ```text
//! manufacturer|name|series
//! ```
//!
//! Trailing fields may be omitted. Empty fields are kept, so `"Acme||X"`
//! has an empty name and series `X`.

use devident_types::DeviceInfo;

use crate::RECORD_DELIMITER;

/// Decomposed device record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record<'a> {
    pub manufacturer: &'a str,
    pub name: &'a str,
    pub series: &'a str,
}

impl<'a> Record<'a> {
    /// Split a raw record into its fields
    ///
    /// Missing positions are empty; anything after the third field is
    /// ignored. Never fails.
    pub fn parse(raw: &'a str) -> Self {
        let mut fields = raw.split(RECORD_DELIMITER);

        Self {
            manufacturer: fields.next().unwrap_or_default(),
            name: fields.next().unwrap_or_default(),
            series: fields.next().unwrap_or_default(),
        }
    }

    /// Convert into resolved device information
    pub fn into_info(self) -> DeviceInfo {
        DeviceInfo::new(self.manufacturer, self.name, self.series)
    }
}
