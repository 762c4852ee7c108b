//! SQL import script: schema plus batched `INSERT OR IGNORE` statements
//! suitable for SQLite-compatible hosted databases that cap statement
//! sizes, hence the 500-row batches.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::generated_at;
use crate::error::Result;
use crate::merge::{MasterDatabase, MergeStats};
use crate::record::Record;

const BATCH_SIZE: usize = 500;

pub const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS oui_registry (
  oui TEXT PRIMARY KEY,
  manufacturer TEXT NOT NULL,
  registry TEXT,
  short_name TEXT,
  device_type TEXT,
  registered_date TEXT,
  address TEXT,
  sources TEXT,
  last_updated TEXT DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_oui_manufacturer ON oui_registry(manufacturer);
CREATE INDEX IF NOT EXISTS idx_oui_short_name ON oui_registry(short_name);
CREATE INDEX IF NOT EXISTS idx_oui_registered_date ON oui_registry(registered_date);
";

pub fn write(path: &Path, db: &MasterDatabase, stats: &MergeStats) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "-- Master OUI Database Import")?;
    writeln!(w, "-- Generated: {}", generated_at())?;
    writeln!(w, "-- Total Entries: {}", stats.unique)?;
    writeln!(w)?;
    writeln!(w, "{SCHEMA}")?;

    let records: Vec<&Record> = db.values().collect();
    for (batch_idx, batch) in records.chunks(BATCH_SIZE).enumerate() {
        writeln!(w, "-- Batch {} ({} entries)", batch_idx + 1, batch.len())?;
        writeln!(
            w,
            "INSERT OR IGNORE INTO oui_registry (oui, manufacturer, registry, short_name, device_type, registered_date, address, sources) VALUES"
        )?;
        let values: Vec<String> = batch.iter().map(|r| value_tuple(r)).collect();
        writeln!(w, "{};", values.join(",\n"))?;
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

fn value_tuple(record: &Record) -> String {
    format!(
        "  ('{}', '{}', '{}', {}, {}, {}, '{}', '{}')",
        record.key,
        quote(&record.manufacturer),
        record.registry,
        opt(record.short_name.as_deref()),
        opt(record.device_type),
        opt(record.registered_date.as_deref()),
        quote(record.address.as_deref().unwrap_or("")),
        record.sources.join("+"),
    )
}

fn quote(text: &str) -> String {
    text.replace('\'', "''")
}

fn opt(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("'{}'", quote(v)),
        None => "NULL".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Registry, SourceSet, SourceTag};
    use tempfile::tempdir;

    #[test]
    fn test_sql_escaping_and_nulls() {
        let mut db = MasterDatabase::new();
        db.insert(
            "00:11:22".to_string(),
            Record {
                key: "00:11:22".to_string(),
                manufacturer: "O'Brien Networks".to_string(),
                registry: Registry::MaL,
                short_name: None,
                device_type: Some("Router"),
                address: None,
                registered_date: None,
                sources: SourceSet::new(SourceTag::Ieee),
            },
        );
        let stats = MergeStats {
            unique: 1,
            ..MergeStats::default()
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.sql");
        write(&path, &db, &stats).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("CREATE TABLE IF NOT EXISTS oui_registry"));
        assert!(content.contains("INSERT OR IGNORE INTO oui_registry"));
        assert!(content.contains("'O''Brien Networks'"));
        assert!(content.contains("NULL, 'Router', NULL"));
    }

    #[test]
    fn test_batching_at_500_rows() {
        let mut db = MasterDatabase::new();
        for i in 0..501 {
            let key = format!("00:11:{i:02X}"); // uniqueness is all that matters
            db.insert(
                format!("{key}:{i}"),
                Record {
                    key: key.clone(),
                    manufacturer: "V".to_string(),
                    registry: Registry::MaL,
                    short_name: None,
                    device_type: None,
                    address: None,
                    registered_date: None,
                    sources: SourceSet::new(SourceTag::Nmap),
                },
            );
        }
        let stats = MergeStats::default();

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.sql");
        write(&path, &db, &stats).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("-- Batch ").count(), 2);
        assert!(content.contains("-- Batch 2 (1 entries)"));
    }
}
