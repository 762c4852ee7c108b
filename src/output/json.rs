//! JSON artifacts: pretty-printed for humans, compact for the lookup
//! service and scripts. The country field is derived from the address at
//! serialization time; it never exists inside the master database.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::country::extract_country;
use crate::error::Result;
use crate::merge::MasterDatabase;
use crate::record::Registry;

/// One serialized entry. Field order is the artifact's column order;
/// absent optionals serialize as explicit nulls.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub manufacturer: &'a str,
    pub registry: Registry,
    pub short_name: Option<&'a str>,
    pub device_type: Option<&'a str>,
    pub registered_date: Option<&'a str>,
    pub address: Option<&'a str>,
    pub country: Option<String>,
    pub sources: Vec<&'static str>,
}

/// Build the serializable view of the whole database, in insertion order.
pub fn build_entries(db: &MasterDatabase) -> IndexMap<&str, JsonEntry<'_>> {
    db.iter()
        .map(|(key, record)| {
            let entry = JsonEntry {
                manufacturer: &record.manufacturer,
                registry: record.registry,
                short_name: record.short_name.as_deref(),
                device_type: record.device_type,
                registered_date: record.registered_date.as_deref(),
                address: record.address.as_deref(),
                country: record
                    .address
                    .as_deref()
                    .and_then(extract_country),
                sources: record.sources.iter().map(|t| t.as_str()).collect(),
            };
            (key.as_str(), entry)
        })
        .collect()
}

pub fn write_pretty(path: &Path, entries: &IndexMap<&str, JsonEntry<'_>>) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, entries).map_err(std::io::Error::other)?;
    w.flush()?;
    Ok(())
}

pub fn write_compact(path: &Path, entries: &IndexMap<&str, JsonEntry<'_>>) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut w, entries).map_err(std::io::Error::other)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, SourceSet, SourceTag};

    #[test]
    fn test_country_derived_from_address() {
        let mut db = MasterDatabase::new();
        db.insert(
            "00:11:22".to_string(),
            Record {
                key: "00:11:22".to_string(),
                manufacturer: "Example Inc".to_string(),
                registry: Registry::MaL,
                short_name: None,
                device_type: None,
                address: Some("1 Example St US 12345".to_string()),
                registered_date: None,
                sources: SourceSet::new(SourceTag::Ieee),
            },
        );

        let entries = build_entries(&db);
        let entry = &entries["00:11:22"];
        assert_eq!(entry.country.as_deref(), Some("US"));

        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.contains("\"country\":\"US\""));
        assert!(json.contains("\"registry\":\"MA-L\""));
        // Absent optionals are explicit nulls, not omitted.
        assert!(json.contains("\"short_name\":null"));
    }
}
