//! Identifiers from the SMBIOS/DMI tables
//!
//! On Linux the kernel exposes the DMI strings under `/sys/class/dmi/id`.
//! The board name serves as the device identifier and the product name as
//! the model.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::{error::*, IdentifierSource, RawIdentifiers};

/// Reads the identifiers from sysfs DMI attributes
#[derive(Debug, Clone)]
pub struct DmiSource {
    root: PathBuf,
}

impl DmiSource {
    /// Default sysfs location of the DMI attributes
    pub const DEFAULT_ROOT: &'static str = "/sys/class/dmi/id";

    /// Attribute holding the device identifier
    pub const DEVICE_ATTR: &'static str = "board_name";

    /// Attribute holding the model identifier
    pub const MODEL_ATTR: &'static str = "product_name";

    pub fn new() -> Self {
        Self {
            root: PathBuf::from(Self::DEFAULT_ROOT),
        }
    }

    /// Set the directory holding the DMI attributes
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    fn read(&self, attr: &str) -> Result<Option<String>> {
        let path = self.root.join(attr);

        // Not all firmware writes valid UTF-8; keys escape everything anyway
        match fs::read(&path) {
            Ok(bytes) => {
                let value = String::from_utf8_lossy(&bytes).trim_end().to_string();
                trace!(path = %path.display(), value = value.as_str(), "Read DMI attribute");
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "DMI attribute not present");
                Ok(None)
            }
            Err(source) => Err(Error::Io { path, source }),
        }
    }
}

impl Default for DmiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for DmiSource {
    fn identifiers(&self) -> Result<RawIdentifiers> {
        Ok(RawIdentifiers::from_options(
            self.read(Self::DEVICE_ATTR)?,
            self.read(Self::MODEL_ATTR)?,
        ))
    }

    fn describe(&self) -> String {
        format!("dmi ({})", self.root.display())
    }
}
