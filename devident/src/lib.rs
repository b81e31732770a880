//! # devident
//!
//! Identify the running device from its manufacturer-assigned identifiers.
//!
//! ## Features
//!
//! - Two-stage lookup (device identifier, then device and model combined)
//! - Compiled-in device table
//! - Pluggable identifier sources (environment, DMI, fixed values)
//! - Total accessors: unknown devices yield empty strings, never errors
//!
//! ## Quick Start
//!
//! ```no_run
//! if devident::found() {
//!     println!("Running on {}", devident::full_name());
//! }
//! println!("{}", devident::info());
//! ```
//!
//! With explicit identifiers:
//!
//! ```
//! use devident::{FixedSource, Identifier};
//!
//! let info = Identifier::new()
//!     .with_source(FixedSource::new("hammerhead", "Nexus 5"))
//!     .identify();
//!
//! assert_eq!(info.full_name(), "LGE Nexus 5");
//! ```

pub mod builtin;
pub mod current;
pub mod error;
pub mod identifier;

// Re-exports
pub use builtin::builtin;
pub use current::{current, found, full_name, info, manufacturer, name, series};
pub use error::{Error, Result};
pub use identifier::Identifier;

// Re-export types
pub use devident_core::{Database, LookupStage, MemoryDatabase};
pub use devident_host::{DmiSource, EnvSource, FixedSource, HostSource, IdentifierSource};
pub use devident_types::{DeviceInfo, RawIdentifiers};
