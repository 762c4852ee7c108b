//! Input source parsers.
//!
//! Each parser is a pure transform from raw file text to a sequence of
//! [`RawRecord`]s. Parsing tolerates malformed individual lines by
//! skipping them — upstream registry files are not validated, and one
//! corrupt row must degrade coverage, never abort ingestion. Every parser
//! exposes a fallible parse-single-line operation whose `None` result the
//! enclosing loop treats as a no-op.

mod ieee_csv;
mod manuf;
mod prefixes;

pub use ieee_csv::parse_ieee_csv;
pub use manuf::parse_manuf;
pub use prefixes::parse_prefixes;

use crate::record::Registry;

/// The common record shape every parser produces and the merge engine
/// consumes. Parsers fill only the fields their format carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Canonical key when the source token normalized, otherwise the raw
    /// uppercased token passed through (such tokens never collide with
    /// canonical colon-delimited keys)
    pub key: String,
    /// Display name for the organization, never empty
    pub manufacturer: String,
    /// Registry block type, when the source states one
    pub registry: Option<Registry>,
    pub short_name: Option<String>,
    /// Long-form name, set only by the name-table parser; its presence
    /// is what authorizes a manufacturer overwrite during merging
    pub long_name: Option<String>,
    pub address: Option<String>,
    /// Registration date, when the source itself carries one
    pub registered_date: Option<String>,
}
