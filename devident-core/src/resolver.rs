//! Two-stage device lookup
//!
//! Most devices are identified by their device identifier alone. Some
//! manufacturers reuse the same codename for several variants; those are
//! stored under a composite key built from both identifiers:
//!
//! ```text
//! 1. sanitize(device)                     -> hit: done
//! 2. sanitize(device) + "_" + esc(model)  -> hit: done
//! 3. not found
//! ```

use std::fmt;

use devident_types::DeviceInfo;
use tracing::debug;

use crate::database::Database;
use crate::key::{composite_key, device_key};
use crate::record::Record;

/// Which candidate key matched
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LookupStage {
    /// Device identifier alone
    Device,

    /// Device and model identifiers combined
    Composite,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => write!(f, "device"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

/// A successful database lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit<'a> {
    pub stage: LookupStage,
    pub key: String,
    pub record: &'a str,
}

/// Find the raw record for a device
///
/// Tries the device key first, then the composite key. Returns `None` when
/// neither is in the database.
pub fn lookup<'a, D>(device: &str, model: &str, db: &'a D) -> Option<Hit<'a>>
where
    D: Database + ?Sized,
{
    let key = device_key(device);
    if let Some(record) = db.get(&key) {
        debug!(key = key.as_str(), "Device found by device key");
        return Some(Hit {
            stage: LookupStage::Device,
            key,
            record,
        });
    }

    let key = composite_key(device, model);
    if let Some(record) = db.get(&key) {
        debug!(key = key.as_str(), "Device found by composite key");
        return Some(Hit {
            stage: LookupStage::Composite,
            key,
            record,
        });
    }

    debug!(device, model, "Device not found");
    None
}

/// Resolve device information
///
/// Never fails: an unknown device yields [`DeviceInfo::unknown`], and a
/// short record leaves the missing fields empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use devident_core::resolve;
///
/// let mut db = HashMap::new();
/// db.insert("a3lte_sm2da300f".to_string(), "Samsung|Galaxy A3|Galaxy A".to_string());
///
/// let info = resolve("a3lte", "SM-A300F", &db);
/// assert!(info.found);
/// assert_eq!(info.full_name(), "Samsung Galaxy A3");
/// ```
pub fn resolve<D>(device: &str, model: &str, db: &D) -> DeviceInfo
where
    D: Database + ?Sized,
{
    match lookup(device, model, db) {
        Some(hit) => Record::parse(hit.record).into_info(),
        None => DeviceInfo::unknown(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn db(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Records every key queried
    struct Recording {
        inner: HashMap<String, String>,
        queried: RefCell<Vec<String>>,
    }

    impl Database for Recording {
        fn get(&self, key: &str) -> Option<&str> {
            self.queried.borrow_mut().push(key.to_string());
            self.inner.get(key).map(String::as_str)
        }
    }

    #[test]
    fn test_resolve_by_device() {
        let db = db(&[("hammerhead", "LGE|Nexus 5|Nexus")]);

        let info = resolve("hammerhead", "Nexus 5", &db);

        assert_eq!(info, DeviceInfo::new("LGE", "Nexus 5", "Nexus"));
        assert_eq!(info.full_name(), "LGE Nexus 5");
    }

    #[test]
    fn test_resolve_composite_fallback() {
        let db = db(&[("acme_widget", "Acme|Widget|X")]);

        let info = resolve("acme", "widget", &db);

        assert!(info.found);
        assert_eq!(info.manufacturer, "Acme");
        assert_eq!(info.name, "Widget");
        assert_eq!(info.series, "X");
        assert_eq!(info.full_name(), "Acme Widget");
    }

    #[test]
    fn test_device_key_wins() {
        let db = db(&[("acme", "Acme|Generic|"), ("acme_widget", "Acme|Widget|X")]);

        let hit = lookup("acme", "widget", &db).unwrap();

        assert_eq!(hit.stage, LookupStage::Device);
        assert_eq!(hit.key, "acme");
        assert_eq!(hit.record, "Acme|Generic|");
    }

    #[test]
    fn test_lookup_composite_hit() {
        let db = db(&[("a3lte_sm2da300f", "Samsung|Galaxy A3|Galaxy A")]);

        let hit = lookup("a3lte", "SM-A300F", &db).unwrap();

        assert_eq!(hit.stage, LookupStage::Composite);
        assert_eq!(hit.key, "a3lte_sm2da300f");
    }

    #[test]
    fn test_lookup_order() {
        let db = Recording {
            inner: HashMap::new(),
            queried: RefCell::new(Vec::new()),
        };

        assert!(lookup("Acme-1", "W 2", &db).is_none());
        assert_eq!(*db.queried.borrow(), vec!["acme2d1", "acme2d1_w202"]);
    }

    #[test]
    fn test_resolve_empty_database() {
        let info = resolve("acme", "widget", &HashMap::<String, String>::new());

        assert_eq!(info, DeviceInfo::unknown());
        assert!(!info.found);
        assert_eq!(info.manufacturer, "");
        assert_eq!(info.name, "");
        assert_eq!(info.series, "");
        assert_eq!(info.full_name(), " ");
    }

    #[test]
    fn test_resolve_short_record() {
        let db = db(&[("acme", "Acme")]);

        let info = resolve("acme", "", &db);

        assert!(info.found);
        assert_eq!(info.manufacturer, "Acme");
        assert_eq!(info.name, "");
        assert_eq!(info.series, "");
    }

    #[test]
    fn test_resolve_empty_record() {
        let db = db(&[("acme", "")]);

        let info = resolve("acme", "", &db);

        assert!(info.found);
        assert_eq!(info.to_json(), "{}");
    }

    #[test]
    fn test_resolve_empty_identifiers() {
        let db = db(&[("UNKNOWN_", "Should|Not|Matter")]);

        // Both identifiers empty: device key is the sentinel, composite is "UNKNOWN_"
        let hit = lookup("", "", &db).unwrap();
        assert_eq!(hit.stage, LookupStage::Composite);

        let info = resolve("", "", &HashMap::<String, String>::new());
        assert!(!info.found);
    }

    #[test]
    fn test_resolve_idempotent() {
        let db = db(&[("acme_widget", "Acme|Widget|X")]);

        assert_eq!(resolve("acme", "widget", &db), resolve("acme", "widget", &db));
        assert_eq!(resolve("other", "", &db), resolve("other", "", &db));
    }

    #[test]
    fn test_resolve_memory_database() {
        let db = crate::MemoryDatabase::parse("_9abc = Nine|Abc|").unwrap();

        let info = resolve("9ABC", "", &db);
        assert_eq!(info, DeviceInfo::new("Nine", "Abc", ""));
    }

    #[test]
    fn test_lookup_stage_display() {
        assert_eq!(LookupStage::Device.to_string(), "device");
        assert_eq!(LookupStage::Composite.to_string(), "composite");
    }
}
