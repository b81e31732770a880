//! Identifiers from environment variables

use std::env::{self, VarError};

use tracing::trace;

use crate::{error::*, IdentifierSource, RawIdentifiers};

/// Reads the identifiers from two environment variables
///
/// Unset variables read as empty.
#[derive(Debug, Clone)]
pub struct EnvSource {
    device_var: String,
    model_var: String,
}

impl EnvSource {
    /// Default variable holding the device identifier
    pub const DEVICE_VAR: &'static str = "DEVIDENT_DEVICE";

    /// Default variable holding the model identifier
    pub const MODEL_VAR: &'static str = "DEVIDENT_MODEL";

    pub fn new() -> Self {
        Self {
            device_var: Self::DEVICE_VAR.to_string(),
            model_var: Self::MODEL_VAR.to_string(),
        }
    }

    /// Set the variable holding the device identifier
    pub fn with_device_var(mut self, var: impl Into<String>) -> Self {
        self.device_var = var.into();
        self
    }

    /// Set the variable holding the model identifier
    pub fn with_model_var(mut self, var: impl Into<String>) -> Self {
        self.model_var = var.into();
        self
    }

    /// Check if either variable is present
    pub fn is_set(&self) -> bool {
        env::var_os(&self.device_var).is_some() || env::var_os(&self.model_var).is_some()
    }

    fn read(var: &str) -> Result<Option<String>> {
        match env::var(var) {
            Ok(value) => {
                trace!(var, value = value.as_str(), "Read identifier");
                Ok(Some(value))
            }
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::NotUnicode {
                var: var.to_string(),
            }),
        }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for EnvSource {
    fn identifiers(&self) -> Result<RawIdentifiers> {
        Ok(RawIdentifiers::from_options(
            Self::read(&self.device_var)?,
            Self::read(&self.model_var)?,
        ))
    }

    fn describe(&self) -> String {
        format!("env ({}, {})", self.device_var, self.model_var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Each test uses its own variable names; the process environment is shared.

    #[test]
    fn test_env_source_reads_vars() {
        // SAFETY: no other test touches these variables
        unsafe {
            env::set_var("DEVIDENT_TEST_ENV_DEVICE", "a3lte");
            env::set_var("DEVIDENT_TEST_ENV_MODEL", "SM-A300F");
        }

        let source = EnvSource::new()
            .with_device_var("DEVIDENT_TEST_ENV_DEVICE")
            .with_model_var("DEVIDENT_TEST_ENV_MODEL");

        assert!(source.is_set());
        assert_eq!(
            source.identifiers().unwrap(),
            RawIdentifiers::new("a3lte", "SM-A300F")
        );
    }

    #[test]
    fn test_env_source_unset_is_empty() {
        let source = EnvSource::new()
            .with_device_var("DEVIDENT_TEST_UNSET_DEVICE")
            .with_model_var("DEVIDENT_TEST_UNSET_MODEL");

        assert!(!source.is_set());
        assert_eq!(source.identifiers().unwrap(), RawIdentifiers::default());
    }

    #[test]
    fn test_env_source_partial() {
        // SAFETY: no other test touches this variable
        unsafe {
            env::set_var("DEVIDENT_TEST_PARTIAL_MODEL", "Nexus 5");
        }

        let source = EnvSource::new()
            .with_device_var("DEVIDENT_TEST_PARTIAL_DEVICE")
            .with_model_var("DEVIDENT_TEST_PARTIAL_MODEL");

        assert!(source.is_set());
        assert_eq!(source.identifiers().unwrap(), RawIdentifiers::new("", "Nexus 5"));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_source_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // SAFETY: no other test touches this variable
        unsafe {
            env::set_var("DEVIDENT_TEST_BAD_DEVICE", OsStr::from_bytes(&[0x66, 0xFF]));
        }

        let source = EnvSource::new().with_device_var("DEVIDENT_TEST_BAD_DEVICE");

        let result = source.identifiers();
        assert!(matches!(result, Err(Error::NotUnicode { var }) if var == "DEVIDENT_TEST_BAD_DEVICE"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(EnvSource::new().describe(), "env (DEVIDENT_DEVICE, DEVIDENT_MODEL)");
    }
}
