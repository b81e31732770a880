//! # devident-core
//!
//! Lookup machinery for identifying a device from its raw identifiers.
//!
//! This crate provides:
//! - Lookup key sanitization
//! - Device record parsing
//! - The database seam and an in-memory table
//! - The two-stage resolver

pub mod database;
pub mod error;
pub mod key;
pub mod record;
pub mod resolver;

pub use database::{Database, MemoryDatabase};
pub use error::{Error, Result};
pub use key::{composite_key, device_key, sanitize};
pub use record::Record;
pub use resolver::{lookup, resolve, Hit, LookupStage};

/// Field delimiter inside a device record
pub const RECORD_DELIMITER: char = '|';
