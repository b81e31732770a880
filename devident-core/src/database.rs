//! Device database
//!
//! The database maps a lookup key to a raw device record. Any key-value
//! store with a synchronous `get` can serve; [`MemoryDatabase`] is the
//! table used for the compiled-in device list.

use std::collections::hash_map::{self, HashMap};

use tracing::debug;

use crate::error::{Error, Result};
use crate::key::is_valid_key;

/// Read-only key → record store
pub trait Database {
    /// Get the raw record stored under `key`
    fn get(&self, key: &str) -> Option<&str>;
}

impl<T: Database + ?Sized> Database for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

impl Database for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl Database for HashMap<&'static str, &'static str> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).copied()
    }
}

/// In-memory device table
///
/// Keys are validated on insert, so every stored key can actually be
/// produced by the key builder.
///
/// # Table format
///
/// ```text
/// # comment
/// hammerhead      = LGE|Nexus 5|Nexus
/// a3lte_sm2da300f = Samsung|Galaxy A3|Galaxy A
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    entries: HashMap<String, String>,
}

impl MemoryDatabase {
    /// Comment marker in the table format
    pub const COMMENT: char = '#';

    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its text form
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A non-comment line has no `=`
    /// - A key is not a valid lookup key
    /// - A key appears twice
    pub fn parse(text: &str) -> Result<Self> {
        let mut db = Self::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with(Self::COMMENT) {
                continue;
            }

            let (key, record) = line.split_once('=').ok_or_else(|| Error::MalformedEntry {
                line: index + 1,
                content: line.to_string(),
            })?;

            db.insert(key.trim(), record.trim())?;
        }

        debug!(entries = db.len(), "Parsed device table");

        Ok(db)
    }

    /// Insert a record
    pub fn insert(&mut self, key: impl Into<String>, record: impl Into<String>) -> Result<()> {
        let key = key.into();

        if !is_valid_key(&key) {
            return Err(Error::InvalidKey(key));
        }

        match self.entries.entry(key) {
            hash_map::Entry::Occupied(entry) => Err(Error::DuplicateKey(entry.key().clone())),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(record.into());
                Ok(())
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, record)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Database for MemoryDatabase {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
