//! Core record types shared by the merge pipeline and the outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IEEE registry block type.
///
/// CID is a company identifier rather than an address block, but it
/// shares the same key space for this system's purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Registry {
    #[serde(rename = "MA-L")]
    MaL,
    #[serde(rename = "MA-M")]
    MaM,
    #[serde(rename = "MA-S")]
    MaS,
    #[serde(rename = "IAB")]
    Iab,
    #[serde(rename = "CID")]
    Cid,
}

impl Registry {
    pub fn as_str(self) -> &'static str {
        match self {
            Registry::MaL => "MA-L",
            Registry::MaM => "MA-M",
            Registry::MaS => "MA-S",
            Registry::Iab => "IAB",
            Registry::Cid => "CID",
        }
    }

    /// Parse a registry tag as it appears in the IEEE CSV files.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MA-L" => Some(Registry::MaL),
            "MA-M" => Some(Registry::MaM),
            "MA-S" => Some(Registry::MaS),
            "IAB" => Some(Registry::Iab),
            "CID" => Some(Registry::Cid),
            _ => None,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::MaL
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance tag identifying which input source contributed a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTag {
    #[serde(rename = "IEEE")]
    Ieee,
    Wireshark,
    Nmap,
}

impl SourceTag {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::Ieee => "IEEE",
            SourceTag::Wireshark => "Wireshark",
            SourceTag::Nmap => "Nmap",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of provenance tags.
///
/// Insertion order is first-contribution order; appending a tag that is
/// already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet(Vec<SourceTag>);

impl SourceSet {
    pub fn new(first: SourceTag) -> Self {
        SourceSet(vec![first])
    }

    /// Append the tag if not already present. Returns `true` on append.
    pub fn insert(&mut self, tag: SourceTag) -> bool {
        if self.0.contains(&tag) {
            false
        } else {
            self.0.push(tag);
            true
        }
    }

    pub fn contains(&self, tag: SourceTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = SourceTag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join tag names with the given separator (`+` in CSV/TSV outputs).
    pub fn join(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// One consolidated address-block record in the master database.
#[derive(Debug, Clone)]
pub struct Record {
    /// Canonical colon-delimited key, the record's identity
    pub key: String,
    /// Registered organization display name, never empty
    pub manufacturer: String,
    pub registry: Registry,
    pub short_name: Option<String>,
    /// Heuristic device-category label, set at most once
    pub device_type: Option<&'static str>,
    /// Free-text postal address as supplied by the registry
    pub address: Option<String>,
    /// Earliest known registration date
    pub registered_date: Option<String>,
    pub sources: SourceSet,
}
