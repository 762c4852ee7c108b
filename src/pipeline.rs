//! Build pipeline: load every source, fold them in fixed order, write
//! all output artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, SourceError};
use crate::history::HistoricalDateIndex;
use crate::merge::{MergeEngine, MergeStats};
use crate::output;
use crate::record::{Registry, SourceTag};
use crate::source::{parse_ieee_csv, parse_manuf, parse_prefixes};

pub const IEEE_MAL: &str = "ieee_mal.csv";
pub const IEEE_MAM: &str = "ieee_mam.csv";
pub const IEEE_MAS: &str = "ieee_mas.csv";
pub const IEEE_IAB: &str = "ieee_iab.csv";
pub const IEEE_CID: &str = "ieee_cid.csv";
pub const WIRESHARK_MANUF: &str = "wireshark_manuf.txt";
pub const NMAP_PREFIXES: &str = "nmap_prefixes.txt";
pub const HISTORY_JSON: &str = "mac_tracker_history.json";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub sources_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Run the full build: sources in, artifacts out.
///
/// The five IEEE registry files and the historical index are optional; a
/// missing one is logged and skipped. The Wireshark name table and the
/// Nmap prefix table are required, since without them the community
/// merge that justifies this dataset never happens.
pub fn run(opts: &BuildOptions) -> Result<MergeStats> {
    let history = load_history(&opts.sources_dir.join(HISTORY_JSON));
    let mut engine = MergeEngine::new(&history);

    // IEEE registries fold first. Largest blocks before smaller ones, so
    // a key claimed in several registries keeps the broadest attribution.
    let ieee_files = [
        (IEEE_MAL, Registry::MaL),
        (IEEE_MAM, Registry::MaM),
        (IEEE_MAS, Registry::MaS),
        (IEEE_IAB, Registry::Iab),
        (IEEE_CID, Registry::Cid),
    ];
    for (file, registry) in ieee_files {
        let path = opts.sources_dir.join(file);
        let text = match read_optional(&path)? {
            Some(text) => text,
            None => {
                warn!(file, "IEEE registry file missing, skipping");
                continue;
            }
        };
        let records = parse_ieee_csv(&text, registry);
        let count = engine.fold_all(records, SourceTag::Ieee);
        info!(file, count, "folded IEEE registry");
        let stats = engine.stats_mut();
        match registry {
            Registry::MaL => stats.ieee_mal = count,
            Registry::MaM => stats.ieee_mam = count,
            Registry::MaS => stats.ieee_mas = count,
            Registry::Iab => stats.ieee_iab = count,
            Registry::Cid => stats.ieee_cid = count,
        }
    }

    let manuf_text = read_required(&opts.sources_dir.join(WIRESHARK_MANUF))?;
    let count = engine.fold_all(parse_manuf(&manuf_text), SourceTag::Wireshark);
    info!(file = WIRESHARK_MANUF, count, "folded name table");
    engine.stats_mut().wireshark = count;

    let prefix_text = read_required(&opts.sources_dir.join(NMAP_PREFIXES))?;
    let count = engine.fold_all(parse_prefixes(&prefix_text), SourceTag::Nmap);
    info!(file = NMAP_PREFIXES, count, "folded prefix table");
    engine.stats_mut().nmap = count;

    let (db, stats) = engine.finish();
    info!(
        unique = stats.unique,
        merged = stats.merged,
        "merge complete"
    );

    output::write_all(&opts.output_dir, &db, &stats)?;
    info!(dir = %opts.output_dir.display(), "artifacts written");
    Ok(stats)
}

/// The historical index never blocks a build: a missing or corrupt file
/// only costs registration dates.
fn load_history(path: &Path) -> HistoricalDateIndex {
    if !path.exists() {
        warn!(path = %path.display(), "no historical index, dates unavailable");
        return HistoricalDateIndex::empty();
    }
    match HistoricalDateIndex::load(path) {
        Ok(index) => {
            info!(dates = index.len(), "loaded historical index");
            index
        }
        Err(err) => {
            warn!(%err, "historical index unreadable, continuing without dates");
            HistoricalDateIndex::empty()
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(text))
}

fn read_required(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SourceError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    fs::read_to_string(path)
        .map_err(|source| {
            SourceError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
}
