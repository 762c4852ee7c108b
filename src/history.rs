//! Historical registration-date index.
//!
//! Built once, before merging begins, from a dated-history JSON source
//! whose native keys encode prefix and bit-width as `<hex>/<width>`
//! (e.g. `00000c000000/24`). Read-only after construction: the merge
//! engine consults it when a key is first inserted and never mutates it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SourceError};
use crate::key::{format_prefix, BlockWidth};

/// One lifecycle event in the history source. Only `add` events carry
/// the registration date we care about.
#[derive(Debug, Deserialize)]
struct HistoryEvent {
    /// Event type tag (`add`, `change`, `delete`, ...)
    #[serde(rename = "t")]
    kind: String,
    /// Event date, present on `add` events
    #[serde(rename = "d", default)]
    date: Option<String>,
}

/// Mapping from canonical key to earliest known registration date.
#[derive(Debug, Default)]
pub struct HistoricalDateIndex {
    dates: HashMap<String, String>,
}

impl HistoricalDateIndex {
    /// An empty index; lookups always miss.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and build the index from a history JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Build the index from raw JSON text.
    ///
    /// Entries with unusable keys or without a dated `add` event are
    /// skipped. Several native keys can normalize to the same canonical
    /// key; the first one seen wins, which is why the source object's
    /// own ordering is preserved during parsing.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: IndexMap<String, Vec<HistoryEvent>> =
            serde_json::from_str(raw).map_err(SourceError::InvalidHistory)?;

        let mut dates = HashMap::new();
        for (native_key, events) in &parsed {
            let Some(key) = normalize_native_key(native_key) else {
                debug!(key = %native_key, "skipping history entry with unusable key");
                continue;
            };
            let Some(date) = events
                .iter()
                .find(|e| e.kind == "add" && e.date.is_some())
                .and_then(|e| e.date.clone())
            else {
                continue;
            };
            dates.entry(key).or_insert(date);
        }
        Ok(Self { dates })
    }

    /// Earliest known registration date for a canonical key.
    pub fn date_for(&self, key: &str) -> Option<&str> {
        self.dates.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Turn a `<hex>/<width>` native key into a canonical key.
///
/// A missing or unparsable width defaults to 24 bits; widths other than
/// 24/28/36, and hex parts shorter than the width requires, are rejected.
fn normalize_native_key(native: &str) -> Option<String> {
    let (hex_part, width_part) = match native.split_once('/') {
        Some((h, w)) => (h, w),
        None => (native, ""),
    };
    let bits: u32 = width_part.parse().unwrap_or(24);
    let width = BlockWidth::from_bits(bits)?;
    let hex: String = hex_part
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    format_prefix(&hex, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_key_widths() {
        assert_eq!(
            normalize_native_key("00000c000000/24").as_deref(),
            Some("00:00:0C")
        );
        assert_eq!(
            normalize_native_key("0050c2abc000/28").as_deref(),
            Some("00:50:C2:A")
        );
        assert_eq!(
            normalize_native_key("70b3d5abc000/36").as_deref(),
            Some("70:B3:D5:AB:C")
        );
        // Missing width defaults to 24 bits.
        assert_eq!(
            normalize_native_key("aabbcc000000").as_deref(),
            Some("AA:BB:CC")
        );
        assert_eq!(normalize_native_key("aabbcc000000/48"), None);
        assert_eq!(normalize_native_key("zz/24"), None);
    }

    #[test]
    fn test_first_add_event_wins() {
        let json = r#"{
            "00000c000000/24": [
                {"t": "change"},
                {"t": "add", "d": "1986-07-10"},
                {"t": "add", "d": "1999-01-01"}
            ]
        }"#;
        let index = HistoricalDateIndex::from_json_str(json).unwrap();
        assert_eq!(index.date_for("00:00:0C"), Some("1986-07-10"));
    }

    #[test]
    fn test_first_seen_key_wins_on_collision() {
        // Two native keys that collapse to the same 24-bit canonical key.
        let json = r#"{
            "aabbcc000000/24": [{"t": "add", "d": "2001-01-01"}],
            "aabbccffffff/24": [{"t": "add", "d": "2005-05-05"}]
        }"#;
        let index = HistoricalDateIndex::from_json_str(json).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.date_for("AA:BB:CC"), Some("2001-01-01"));
    }

    #[test]
    fn test_entries_without_dated_add_are_skipped() {
        let json = r#"{
            "aabbcc000000/24": [{"t": "delete"}],
            "ddeeff000000/24": [{"t": "add"}]
        }"#;
        let index = HistoricalDateIndex::from_json_str(json).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(HistoricalDateIndex::from_json_str("not json").is_err());
    }
}
