//! Ready-to-query SQLite artifact, populated in one bulk transaction.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::merge::MasterDatabase;

const SCHEMA: &str = "\
CREATE TABLE oui_registry (
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
CREATE INDEX idx_manufacturer ON oui_registry(manufacturer);
CREATE INDEX idx_short_name ON oui_registry(short_name);
CREATE INDEX idx_registry ON oui_registry(registry);
CREATE INDEX idx_registered_date ON oui_registry(registered_date);
";

pub fn write(path: &Path, db: &MasterDatabase) -> Result<()> {
    // Rebuilt from scratch each run; a stale file must not survive.
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO oui_registry \
             (oui, manufacturer, registry, short_name, device_type, registered_date, address, sources) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for record in db.values() {
            stmt.execute(params![
                record.key,
                record.manufacturer,
                record.registry.as_str(),
                record.short_name,
                record.device_type,
                record.registered_date,
                record.address.as_deref().unwrap_or(""),
                record.sources.join("+"),
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Registry, SourceSet, SourceTag};
    use tempfile::tempdir;

    #[test]
    fn test_sqlite_round_trip() {
        let mut db = MasterDatabase::new();
        db.insert(
            "00:11:22".to_string(),
            Record {
                key: "00:11:22".to_string(),
                manufacturer: "Example Inc".to_string(),
                registry: Registry::MaL,
                short_name: Some("EXI".to_string()),
                device_type: None,
                address: None,
                registered_date: Some("2001-01-01".to_string()),
                sources: SourceSet::new(SourceTag::Ieee),
            },
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.db");
        write(&path, &db).unwrap();

        let conn = Connection::open(&path).unwrap();
        let (manufacturer, sources): (String, String) = conn
            .query_row(
                "SELECT manufacturer, sources FROM oui_registry WHERE oui = '00:11:22'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(manufacturer, "Example Inc");
        assert_eq!(sources, "IEEE");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM oui_registry", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_existing_file_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.db");
        std::fs::write(&path, b"stale not-a-database").unwrap();

        let db = MasterDatabase::new();
        write(&path, &db).unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM oui_registry", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
