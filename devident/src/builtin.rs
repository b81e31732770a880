//! Compiled-in device table

use std::sync::LazyLock;

use devident_core::MemoryDatabase;
use tracing::error;

/// Text of the compiled-in table
pub const TABLE: &str = include_str!("../data/devices.db");

static BUILTIN: LazyLock<MemoryDatabase> = LazyLock::new(|| {
    MemoryDatabase::parse(TABLE).unwrap_or_else(|e| {
        error!("Compiled-in device table is invalid: {}", e);
        MemoryDatabase::new()
    })
});

/// The compiled-in device table, parsed on first use
pub fn builtin() -> &'static MemoryDatabase {
    &BUILTIN
}
