//! Lookup service over the compact JSON artifact.
//!
//! The database is an immutable snapshot once loaded: point queries,
//! substring searches, and bulk extraction all borrow it read-only, so a
//! host process may serve concurrent readers from one snapshot.
//! Refreshing means loading a new snapshot and swapping the reference,
//! never mutating in place.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::key::normalize_lookup;

/// MAC-shaped substrings: six delimited octet pairs or twelve bare hex
/// digits.
static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}|[0-9A-Fa-f]{12}")
        .expect("static MAC pattern must compile")
});

/// One database entry as stored in the compact JSON artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct DbEntry {
    pub manufacturer: String,
    #[serde(default)]
    pub registry: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub registered_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Outcome of a point query. An absent entry is a legitimate result —
/// the dataset cannot be exhaustive — so "unknown" is modeled here, not
/// as an error.
#[derive(Debug)]
pub struct Lookup<'a> {
    /// The 24-bit key the query normalized to
    pub oui: String,
    /// The query string as supplied
    pub query: String,
    pub entry: Option<&'a DbEntry>,
}

impl Lookup<'_> {
    pub fn is_known(&self) -> bool {
        self.entry.is_some()
    }

    /// Manufacturer name, with the unknown placeholder on a miss.
    pub fn manufacturer(&self) -> &str {
        self.entry.map_or("Unknown", |e| e.manufacturer.as_str())
    }
}

/// Whole-database statistics.
#[derive(Debug, Default)]
pub struct DbStats {
    pub total: usize,
    pub with_date: usize,
    pub by_device_type: HashMap<String, usize>,
    pub by_country: HashMap<String, usize>,
    pub by_registry: HashMap<String, usize>,
}

impl DbStats {
    /// Entries of a counter map, largest first.
    pub fn sorted_desc(map: &HashMap<String, usize>) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        entries
    }
}

/// An immutable, insertion-ordered snapshot of the merged database.
#[derive(Debug)]
pub struct OuiDatabase {
    entries: IndexMap<String, DbEntry>,
}

impl OuiDatabase {
    /// Load the compact JSON artifact.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QueryError::DatabaseNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: IndexMap<String, DbEntry> =
            serde_json::from_str(raw).map_err(QueryError::Corrupt)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Point query: normalize to a 24-bit key and look it up.
    ///
    /// A key that is absent yields a [`Lookup`] with no entry; only an
    /// input that cannot be reduced to a key at all is an error.
    pub fn lookup(&self, query: &str) -> Result<Lookup<'_>> {
        let oui = normalize_lookup(query).map_err(|_| QueryError::InvalidMac {
            input: query.to_string(),
        })?;
        let entry = self.entries.get(&oui);
        Ok(Lookup {
            oui,
            query: query.to_string(),
            entry,
        })
    }

    /// Case-insensitive substring search over manufacturer and short
    /// name, in the mapping's insertion order. Display caps are the
    /// caller's concern.
    pub fn search(&self, term: &str) -> Vec<(&str, &DbEntry)> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, e)| {
                e.manufacturer.to_lowercase().contains(&needle)
                    || e.short_name
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
            })
            .map(|(k, e)| (k.as_str(), e))
            .collect()
    }

    /// Scan arbitrary text for MAC-shaped substrings and look up each.
    pub fn extract(&self, text: &str) -> Vec<Lookup<'_>> {
        MAC_PATTERN
            .find_iter(text)
            .filter_map(|m| self.lookup(m.as_str()).ok())
            .collect()
    }

    /// Counts by device type, country, and registry, plus how many
    /// entries carry a registration date.
    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            total: self.entries.len(),
            ..DbStats::default()
        };
        for entry in self.entries.values() {
            let device_type = entry.device_type.as_deref().unwrap_or("Unclassified");
            *stats
                .by_device_type
                .entry(device_type.to_string())
                .or_insert(0) += 1;
            if let Some(country) = &entry.country {
                *stats.by_country.entry(country.clone()).or_insert(0) += 1;
            }
            if let Some(registry) = &entry.registry {
                *stats.by_registry.entry(registry.clone()).or_insert(0) += 1;
            }
            if entry.registered_date.is_some() {
                stats.with_date += 1;
            }
        }
        stats
    }
}
