//! Build-then-query: the compact JSON artifact must answer lookups for
//! everything the pipeline merged.

use std::fs;

use tempfile::tempdir;

use ouidb::lookup::OuiDatabase;
use ouidb::output;
use ouidb::pipeline::{self, BuildOptions};

const IEEE_MAL: &str = "\
Registry,Assignment,Organization Name,Organization Address
MA-L,001122,\"Example Inc\",\"1 Example St US 12345\"
MA-L,00000C,\"Cisco Systems, Inc\",\"170 West Tasman Drive San Jose CA US 95134\"
";

const MANUF: &str = "00:11:22\tEXI\tExample Incorporated\n";

const PREFIXES: &str = "AABBCC Prefix Vendor GmbH\n";

fn build_db() -> (tempfile::TempDir, OuiDatabase) {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    fs::write(sources.path().join("ieee_mal.csv"), IEEE_MAL).unwrap();
    fs::write(sources.path().join("wireshark_manuf.txt"), MANUF).unwrap();
    fs::write(sources.path().join("nmap_prefixes.txt"), PREFIXES).unwrap();

    pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    let db = OuiDatabase::load(&output_dir.path().join(output::MASTER_MIN_JSON)).unwrap();
    (output_dir, db)
}

#[test]
fn test_full_mac_resolves_to_merged_record() {
    let (_dir, db) = build_db();

    let hit = db.lookup("00-11-22-33-44-55").unwrap();
    assert_eq!(hit.oui, "00:11:22");
    assert!(hit.is_known());

    let entry = hit.entry.unwrap();
    assert_eq!(entry.manufacturer, "Example Incorporated");
    assert_eq!(entry.short_name.as_deref(), Some("EXI"));
    assert_eq!(entry.country.as_deref(), Some("US"));
    assert_eq!(entry.sources, ["IEEE", "Wireshark"]);
}

#[test]
fn test_unknown_prefix_is_a_miss_not_an_error() {
    let (_dir, db) = build_db();
    let miss = db.lookup("FF:FF:FF:FF:FF:FF").unwrap();
    assert!(!miss.is_known());
    assert_eq!(miss.manufacturer(), "Unknown");
}

#[test]
fn test_classified_entry_survives_serialization() {
    let (_dir, db) = build_db();
    let hit = db.lookup("00:00:0C:01:02:03").unwrap();
    let entry = hit.entry.unwrap();
    assert_eq!(entry.device_type.as_deref(), Some("Router"));
    assert_eq!(entry.registry.as_deref(), Some("MA-L"));
}

#[test]
fn test_search_over_built_database() {
    let (_dir, db) = build_db();
    let hits = db.search("example");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "00:11:22");
}

#[test]
fn test_extract_over_built_database() {
    let (_dir, db) = build_db();
    let log = "host A at 00:11:22:aa:bb:cc, host B at aa-bb-cc-dd-ee-ff, junk 12:34";
    let hits = db.extract(log);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].manufacturer(), "Example Incorporated");
    assert_eq!(hits[1].manufacturer(), "Prefix Vendor GmbH");
}

#[test]
fn test_insertion_order_survives_the_round_trip() {
    let (_dir, db) = build_db();
    let all = db.search("");
    let keys: Vec<&str> = all.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, ["00:11:22", "00:00:0C", "AA:BB:CC"]);
}
