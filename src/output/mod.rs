//! Output artifact writers.
//!
//! All artifacts are derived from the same finished master database and
//! written fresh on every pipeline run, only after every source has been
//! folded in. One writer per format:
//!
//! - CSV / TSV / plain text for grep-and-spreadsheet consumers
//! - pretty and compact JSON (the compact form is what the lookup
//!   service loads)
//! - XML for enterprise consumers
//! - SQL import script and a ready-to-query SQLite database
//! - a human-readable statistics report

mod csv;
mod json;
mod report;
mod sql;
mod sqlite;
mod text;
mod tsv;
mod xml;

use std::fs;
use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::error::Result;
use crate::merge::{MasterDatabase, MergeStats};

pub const MASTER_CSV: &str = "master_oui.csv";
pub const MASTER_JSON: &str = "master_oui.json";
pub const MASTER_MIN_JSON: &str = "master_oui.min.json";
pub const MASTER_TSV: &str = "master_oui.tsv";
pub const MASTER_TXT: &str = "master_oui.txt";
pub const MASTER_XML: &str = "master_oui.xml";
pub const MASTER_SQL: &str = "master_oui.sql";
pub const MASTER_DB: &str = "master_oui.db";
pub const STATS_TXT: &str = "stats.txt";

/// Write every artifact into `output_dir`, the statistics report last so
/// it can record the other artifacts' sizes.
pub fn write_all(output_dir: &Path, db: &MasterDatabase, stats: &MergeStats) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let at = |name: &str| -> PathBuf { output_dir.join(name) };

    csv::write(&at(MASTER_CSV), db)?;
    info!(entries = db.len(), "wrote {MASTER_CSV}");

    let entries = json::build_entries(db);
    json::write_pretty(&at(MASTER_JSON), &entries)?;
    json::write_compact(&at(MASTER_MIN_JSON), &entries)?;
    info!(entries = db.len(), "wrote {MASTER_JSON} and {MASTER_MIN_JSON}");

    tsv::write(&at(MASTER_TSV), db)?;
    text::write(&at(MASTER_TXT), db)?;
    xml::write(&at(MASTER_XML), db)?;
    sql::write(&at(MASTER_SQL), db, stats)?;
    sqlite::write(&at(MASTER_DB), db)?;
    info!("wrote {MASTER_TSV}, {MASTER_TXT}, {MASTER_XML}, {MASTER_SQL}, {MASTER_DB}");

    report::write(&at(STATS_TXT), output_dir, stats)?;
    info!("wrote {STATS_TXT}");
    Ok(())
}

/// RFC 3339 generation timestamp for artifact headers.
pub(crate) fn generated_at() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
