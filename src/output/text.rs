//! Plain-text artifact: `<6-hex>\t<manufacturer>` lines for grep/awk
//! pipelines. Wider keys are truncated to their covering 24-bit prefix.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::generated_at;
use crate::error::Result;
use crate::merge::MasterDatabase;

pub fn write(path: &Path, db: &MasterDatabase) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "# OUI Master Database - Simple Format")?;
    writeln!(w, "# Generated: {}", generated_at())?;
    writeln!(w, "# Total Entries: {}", db.len())?;
    writeln!(w, "# Format: OUI<tab>Manufacturer")?;
    writeln!(w, "#")?;
    for record in db.values() {
        // Keys can be raw pass-through tokens, so truncate on char
        // boundaries, not bytes.
        let compact = record.key.replace(':', "");
        let prefix: String = compact.chars().take(6).collect();
        writeln!(w, "{}\t{}", prefix, record.manufacturer)?;
    }
    w.flush()?;
    Ok(())
}
