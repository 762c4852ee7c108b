//! The merge engine: folds raw records from every source into one
//! master mapping from canonical key to consolidated record.
//!
//! Processing order across sources matters. The pipeline folds
//! higher-authority sources first (the five IEEE registries), then the
//! community sources (Wireshark name table, Nmap prefix table), so the
//! per-field first-writer-wins rules approximate "authoritative source
//! wins". Reordering sources silently changes naming and classification
//! outcomes; the fold order is fixed here and covered by tests.

use indexmap::IndexMap;

use crate::classify::classify;
use crate::history::HistoricalDateIndex;
use crate::record::{Record, SourceSet, SourceTag};
use crate::source::RawRecord;

/// The consolidated mapping the pipeline produces. Insertion-ordered:
/// every output artifact and the lookup service iterate it in
/// first-contribution order.
pub type MasterDatabase = IndexMap<String, Record>;

/// Per-source and aggregate merge counters.
#[derive(Debug, Clone, Default)]
pub struct MergeStats {
    pub ieee_mal: usize,
    pub ieee_mam: usize,
    pub ieee_mas: usize,
    pub ieee_iab: usize,
    pub ieee_cid: usize,
    pub wireshark: usize,
    pub nmap: usize,
    /// Registration dates loaded from the historical index
    pub history_dates: usize,
    /// Fold-into-existing-key events, counted whether or not any field
    /// actually changed
    pub merged: usize,
    /// Final unique key count
    pub unique: usize,
}

impl MergeStats {
    pub fn ieee_total(&self) -> usize {
        self.ieee_mal + self.ieee_mam + self.ieee_mas + self.ieee_iab + self.ieee_cid
    }
}

/// Accumulates records into the master database.
///
/// The historical-date index is consulted when a key is first inserted
/// and never mutated; its date is authoritative and final for that key.
pub struct MergeEngine<'a> {
    db: MasterDatabase,
    history: &'a HistoricalDateIndex,
    stats: MergeStats,
}

impl<'a> MergeEngine<'a> {
    pub fn new(history: &'a HistoricalDateIndex) -> Self {
        Self {
            db: MasterDatabase::new(),
            history,
            stats: MergeStats {
                history_dates: history.len(),
                ..MergeStats::default()
            },
        }
    }

    /// Fold one raw record in under the given provenance tag.
    pub fn fold(&mut self, raw: RawRecord, tag: SourceTag) {
        match self.db.get_mut(&raw.key) {
            Some(existing) => {
                existing.sources.insert(tag);

                // A long-form name from the name table supersedes
                // whatever display name came before; nothing else may
                // overwrite the manufacturer.
                if let Some(long_name) = raw.long_name {
                    existing.manufacturer = long_name;
                }
                if existing.short_name.is_none() {
                    existing.short_name = raw.short_name;
                }
                // First successful classification wins; later sources
                // never override it, even with a different label.
                if existing.device_type.is_none() {
                    existing.device_type =
                        classify(&raw.manufacturer, existing.short_name.as_deref());
                }
                if existing.address.is_none() {
                    existing.address = raw.address;
                }
                if existing.registered_date.is_none() {
                    existing.registered_date = raw.registered_date;
                }
                self.stats.merged += 1;
            }
            None => {
                let device_type = classify(&raw.manufacturer, raw.short_name.as_deref());
                let registered_date = self
                    .history
                    .date_for(&raw.key)
                    .map(str::to_string)
                    .or(raw.registered_date);
                let record = Record {
                    key: raw.key.clone(),
                    manufacturer: raw.manufacturer,
                    registry: raw.registry.unwrap_or_default(),
                    short_name: raw.short_name,
                    device_type,
                    address: raw.address,
                    registered_date,
                    sources: SourceSet::new(tag),
                };
                self.db.insert(raw.key, record);
            }
        }
    }

    /// Fold a whole parsed source, returning how many records it held.
    pub fn fold_all(&mut self, records: Vec<RawRecord>, tag: SourceTag) -> usize {
        let count = records.len();
        for raw in records {
            self.fold(raw, tag);
        }
        count
    }

    pub fn stats_mut(&mut self) -> &mut MergeStats {
        &mut self.stats
    }

    pub fn db(&self) -> &MasterDatabase {
        &self.db
    }

    /// Finish merging: freeze the database and the final statistics.
    pub fn finish(mut self) -> (MasterDatabase, MergeStats) {
        self.stats.unique = self.db.len();
        (self.db, self.stats)
    }
}
