//! XML artifact for enterprise consumers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::generated_at;
use crate::error::Result;
use crate::merge::MasterDatabase;

pub fn write(path: &Path, db: &MasterDatabase) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(w, "<!-- OUI Master Database -->")?;
    writeln!(w, "<!-- Generated: {} -->", generated_at())?;
    writeln!(w, "<!-- Total Entries: {} -->", db.len())?;
    writeln!(w, "<oui_database>")?;
    for record in db.values() {
        writeln!(w, "  <entry>")?;
        writeln!(w, "    <oui>{}</oui>", escape(&record.key))?;
        writeln!(
            w,
            "    <manufacturer>{}</manufacturer>",
            escape(&record.manufacturer)
        )?;
        writeln!(w, "    <registry>{}</registry>", record.registry)?;
        if let Some(short_name) = &record.short_name {
            writeln!(w, "    <short_name>{}</short_name>", escape(short_name))?;
        }
        if let Some(date) = &record.registered_date {
            writeln!(w, "    <registered_date>{date}</registered_date>")?;
        }
        writeln!(w, "    <sources>{}</sources>", record.sources.join(","))?;
        writeln!(w, "  </entry>")?;
    }
    writeln!(w, "</oui_database>")?;
    w.flush()?;
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
