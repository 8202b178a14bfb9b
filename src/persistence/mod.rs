//! Snapshot wire format
//!
//! ```json
//! { "items": { "<item-key>": { "unlocked": true }, ... } }
//! ```
//!
//! Writing always emits every catalog key in canonical order, so equal states
//! produce identical bytes. Reading is lenient: unknown top-level fields and
//! unknown item keys are ignored, and an entry whose `unlocked` is not a
//! boolean is skipped.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog;
use crate::error::RollerError;

#[derive(Serialize)]
struct UnlockedFlag {
    unlocked: bool,
}

/// Borrowed view of live flags, indexed like the catalog
struct ItemsRef<'a>(&'a [bool]);

impl Serialize for ItemsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (item, &unlocked) in catalog::defaults().iter().zip(self.0) {
            map.serialize_entry(item.key, &UnlockedFlag { unlocked })?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    items: ItemsRef<'a>,
}

/// Serialize catalog-indexed flags into snapshot JSON
pub fn encode(flags: &[bool]) -> Result<String, RollerError> {
    debug_assert_eq!(flags.len(), catalog::len());
    serde_json::to_string(&SnapshotRef {
        items: ItemsRef(flags),
    })
    .map_err(RollerError::Encode)
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    items: Option<Map<String, Value>>,
}

/// A parsed snapshot, holding only the entries that are usable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(String, bool)>,
}

impl Snapshot {
    /// Parse snapshot JSON
    pub fn parse(raw: &str) -> Result<Self, RollerError> {
        let raw: RawSnapshot = serde_json::from_str(raw).map_err(RollerError::PersistenceRead)?;
        let entries = raw
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, entry)| {
                let unlocked = entry.get("unlocked").and_then(Value::as_bool)?;
                Some((key, unlocked))
            })
            .collect();
        Ok(Self { entries })
    }

    /// Flag recorded for `key`, if any
    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, unlocked)| unlocked)
    }

    /// Number of usable entries (including keys outside the catalog)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_flags() -> Vec<bool> {
        catalog::defaults()
            .iter()
            .map(|i| i.default_unlocked)
            .collect()
    }

    #[test]
    fn test_encode_canonical_order() {
        let json = encode(&default_flags()).unwrap();
        assert!(json.starts_with(r#"{"items":{"video-camera":{"unlocked":true},"head-gear""#));
        assert!(json.ends_with(r#""photo-camera":{"unlocked":false}}}"#));

        // Catalog order is not alphabetical, so a sorted map would differ here
        let dots = json.find("\"dots\"").unwrap();
        let crucifix = json.find("\"crucifix\"").unwrap();
        assert!(dots < crucifix);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let snap = Snapshot::parse(
            r#"{"version":7,"items":{"salt":{"unlocked":true,"color":"white"}},"extra":[]}"#,
        )
        .unwrap();
        assert_eq!(snap.get("salt"), Some(true));
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_parse_skips_non_bool_entries() {
        let snap = Snapshot::parse(
            r#"{"items":{"salt":{"unlocked":"yes"},"dots":{},"tripod":null,"crucifix":{"unlocked":false}}}"#,
        )
        .unwrap();
        assert_eq!(snap.get("salt"), None);
        assert_eq!(snap.get("dots"), None);
        assert_eq!(snap.get("tripod"), None);
        assert_eq!(snap.get("crucifix"), Some(false));
    }

    #[test]
    fn test_parse_missing_items_is_empty() {
        assert!(Snapshot::parse("{}").unwrap().is_empty());
        assert!(Snapshot::parse(r#"{"items":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "",
            "not json",
            "[1]",
            "null",
            "42",
            r#"{"items":[1,2]}"#,
            r#"{"items":"x"}"#,
        ] {
            assert!(
                matches!(Snapshot::parse(raw), Err(RollerError::PersistenceRead(_))),
                "expected read error for {raw:?}"
            );
        }
    }
}
