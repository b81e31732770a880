//! Type definitions for devident

pub mod device_info;
pub mod identifiers;

pub use device_info::DeviceInfo;
pub use identifiers::RawIdentifiers;
