//! CSV artifact: full data including addresses.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::merge::MasterDatabase;

const HEADER: &str = "oui,manufacturer,registry,short_name,device_type,registered_date,address,sources";

pub fn write(path: &Path, db: &MasterDatabase) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{HEADER}")?;
    for record in db.values() {
        writeln!(
            w,
            "{},\"{}\",{},{},{},{},\"{}\",{}",
            record.key,
            escape(&record.manufacturer),
            record.registry,
            record.short_name.as_deref().unwrap_or(""),
            record.device_type.unwrap_or(""),
            record.registered_date.as_deref().unwrap_or(""),
            escape(record.address.as_deref().unwrap_or("")),
            record.sources.join("+"),
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Internal double quotes are doubled; the field itself is always quoted.
fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}
