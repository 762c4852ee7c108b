//! Human-readable statistics report, written after every other artifact
//! so their on-disk sizes can be recorded.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{
    generated_at, MASTER_CSV, MASTER_DB, MASTER_JSON, MASTER_MIN_JSON, MASTER_SQL, MASTER_TSV,
    MASTER_TXT, MASTER_XML,
};
use crate::error::Result;
use crate::merge::MergeStats;

pub fn write(path: &Path, output_dir: &Path, stats: &MergeStats) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, "OUI Database Merge Statistics")?;
    writeln!(w, "==============================")?;
    writeln!(w)?;
    writeln!(w, "IEEE Registries Processed:")?;
    writeln!(w, "  MA-L (Large/OUI):   {} entries", stats.ieee_mal)?;
    writeln!(w, "  MA-M (Medium):      {} entries", stats.ieee_mam)?;
    writeln!(w, "  MA-S (Small):       {} entries", stats.ieee_mas)?;
    writeln!(w, "  IAB (Individual):   {} entries", stats.ieee_iab)?;
    writeln!(w, "  CID (Company ID):   {} entries", stats.ieee_cid)?;
    writeln!(w, "  IEEE Total:         {} entries", stats.ieee_total())?;
    writeln!(w)?;
    writeln!(w, "Community Sources:")?;
    writeln!(w, "  Wireshark:          {} entries", stats.wireshark)?;
    writeln!(w, "  Nmap:               {} entries", stats.nmap)?;
    writeln!(w)?;
    writeln!(w, "Historical Data:")?;
    writeln!(w, "  Registration dates: {}", stats.history_dates)?;
    writeln!(w)?;
    writeln!(w, "Results:")?;
    writeln!(w, "  Unique OUIs:        {} entries", stats.unique)?;
    writeln!(
        w,
        "  Merged Entries:     {} (same OUI from multiple sources)",
        stats.merged
    )?;
    writeln!(w)?;
    writeln!(w, "Output Files:")?;
    for name in [
        MASTER_TXT,
        MASTER_CSV,
        MASTER_TSV,
        MASTER_JSON,
        MASTER_MIN_JSON,
        MASTER_XML,
        MASTER_DB,
        MASTER_SQL,
    ] {
        writeln!(
            w,
            "  {:<20}{:.2} MB",
            name,
            file_size_mb(&output_dir.join(name))
        )?;
    }
    writeln!(w)?;
    writeln!(w, "Generated: {}", generated_at())?;

    w.flush()?;
    Ok(())
}

fn file_size_mb(path: &Path) -> f64 {
    fs::metadata(path)
        .map(|m| m.len() as f64 / 1024.0 / 1024.0)
        .unwrap_or(0.0)
}
