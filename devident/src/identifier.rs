//! High-level identification interface

use devident_core::{lookup, Database, MemoryDatabase, Record};
use devident_host::{HostSource, IdentifierSource};
use devident_types::{DeviceInfo, RawIdentifiers};
use tracing::{debug, info, warn};

use crate::builtin::builtin;
use crate::error::Result;

/// Device identifier
///
/// Combines an [`IdentifierSource`] with a [`Database`].
///
/// # Examples
///
/// ```
/// use devident::{FixedSource, Identifier};
///
/// let identifier = Identifier::new()
///     .with_source(FixedSource::new("a3lte", "SM-A300F"));
///
/// let info = identifier.identify();
/// assert_eq!(info.full_name(), "Samsung Galaxy A3");
/// assert_eq!(info.series, "Galaxy A");
/// ```
pub struct Identifier {
    source: Box<dyn IdentifierSource>,
    database: Box<dyn Database + Send + Sync>,
}

impl Identifier {
    /// Create an identifier reading the host with the compiled-in table
    pub fn new() -> Self {
        Self {
            source: Box::new(HostSource::new()),
            database: Box::new(builtin()),
        }
    }

    /// Set the identifier source
    pub fn with_source(mut self, source: impl IdentifierSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Set the device database
    pub fn with_database(mut self, database: impl Database + Send + Sync + 'static) -> Self {
        self.database = Box::new(database);
        self
    }

    /// Use a device table in text form instead of the compiled-in one
    ///
    /// # Errors
    ///
    /// Returns error if the table cannot be parsed
    pub fn with_table(self, table: &str) -> Result<Self> {
        let database = MemoryDatabase::parse(table)?;
        Ok(self.with_database(database))
    }

    /// Identify the device
    ///
    /// Never fails. If the source cannot be read the device is looked up
    /// with empty identifiers, which normally yields an unknown device.
    pub fn identify(&self) -> DeviceInfo {
        let ids = match self.source.identifiers() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to read identifiers from {}: {}", self.source.describe(), e);
                RawIdentifiers::default()
            }
        };

        self.resolve(&ids)
    }

    /// Identify the device, reporting source failures
    pub fn try_identify(&self) -> Result<DeviceInfo> {
        let ids = self.source.identifiers()?;
        Ok(self.resolve(&ids))
    }

    fn resolve(&self, ids: &RawIdentifiers) -> DeviceInfo {
        debug!("Identifying {} from {}", ids, self.source.describe());

        if ids.is_empty() {
            debug!("{} reported no identifiers", self.source.describe());
        }

        match lookup(&ids.device, &ids.model, &*self.database) {
            Some(hit) => {
                let info = Record::parse(hit.record).into_info();
                info!(
                    key = hit.key.as_str(),
                    stage = %hit.stage,
                    "Identified device: {}",
                    info
                );
                info
            }
            None => {
                info!("Device not in database ({})", ids);
                DeviceInfo::unknown()
            }
        }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new()
    }
}
