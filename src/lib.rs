//! Merged OUI vendor database.
//!
//! Consolidates the five IEEE registries, the Wireshark name table, and
//! the Nmap prefix table into one canonical mapping from MAC prefix to
//! vendor record, enriched with heuristic device classification, country
//! extraction, and historical registration dates. The merged database is
//! exported in several formats and served by a lookup API.
//!
//! The `build` pipeline runs in [`pipeline`]; queries against the compact
//! JSON artifact run in [`lookup`].

pub mod classify;
pub mod cli;
pub mod country;
pub mod error;
pub mod history;
pub mod key;
pub mod lookup;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod source;

pub use error::{Error, Result};
