//! TSV artifact: clean import into spreadsheets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::merge::MasterDatabase;

const HEADER: &str = "OUI\tManufacturer\tRegistry\tShort_Name\tRegistered_Date\tSources";

pub fn write(path: &Path, db: &MasterDatabase) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{HEADER}")?;
    for record in db.values() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.key,
            record.manufacturer,
            record.registry,
            record.short_name.as_deref().unwrap_or(""),
            record.registered_date.as_deref().unwrap_or(""),
            record.sources.join("+"),
        )?;
    }
    w.flush()?;
    Ok(())
}
