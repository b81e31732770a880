//! Raw hardware identifiers as reported by the host

use std::fmt;

/// The two manufacturer-assigned identifiers of a device
///
/// `device` is the hardware/board codename, `model` the model string.
/// Either may be empty when the host does not report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawIdentifiers {
    /// Hardware codename
    pub device: String,

    /// Model designation
    pub model: String,
}

impl RawIdentifiers {
    pub fn new(device: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            model: model.into(),
        }
    }

    /// Build from values that may be absent; absent values become empty
    pub fn from_options(device: Option<String>, model: Option<String>) -> Self {
        Self {
            device: device.unwrap_or_default(),
            model: model.unwrap_or_default(),
        }
    }

    /// True when the host reported neither identifier
    pub fn is_empty(&self) -> bool {
        self.device.is_empty() && self.model.is_empty()
    }
}

impl fmt::Display for RawIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device={:?}, model={:?}", self.device, self.model)
    }
}
