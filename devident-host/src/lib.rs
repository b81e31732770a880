//! Host identifier sources
//!
//! Provides the raw device and model identifiers of the running host.

pub mod dmi;
pub mod env;
pub mod error;

pub use dmi::DmiSource;
pub use env::EnvSource;
pub use error::{Error, Result};

pub use devident_types::RawIdentifiers;

/// Source of the raw identifiers for the running device
pub trait IdentifierSource: Send + Sync {
    /// Read both identifiers
    ///
    /// Identifiers the host does not report are returned empty.
    fn identifiers(&self) -> Result<RawIdentifiers>;

    /// Human-readable description, used in logs
    fn describe(&self) -> String;
}

/// Source returning fixed values
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    ids: RawIdentifiers,
}

impl FixedSource {
    pub fn new(device: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            ids: RawIdentifiers::new(device, model),
        }
    }
}

impl IdentifierSource for FixedSource {
    fn identifiers(&self) -> Result<RawIdentifiers> {
        Ok(self.ids.clone())
    }

    fn describe(&self) -> String {
        format!("fixed ({})", self.ids)
    }
}

/// Default host source
///
/// Uses the environment when either override variable is set, otherwise
/// the DMI tables.
#[derive(Debug, Clone, Default)]
pub struct HostSource {
    env: EnvSource,
    dmi: DmiSource,
}

impl HostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the environment source
    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Replace the DMI source
    pub fn with_dmi(mut self, dmi: DmiSource) -> Self {
        self.dmi = dmi;
        self
    }

    fn active(&self) -> &dyn IdentifierSource {
        if self.env.is_set() {
            return &self.env;
        }
        &self.dmi
    }
}

impl IdentifierSource for HostSource {
    fn identifiers(&self) -> Result<RawIdentifiers> {
        self.active().identifiers()
    }

    fn describe(&self) -> String {
        self.active().describe()
    }
}
