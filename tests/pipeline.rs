//! End-to-end build: fixture sources in, all artifacts out.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use ouidb::error::{Error, SourceError};
use ouidb::output;
use ouidb::pipeline::{self, BuildOptions};

const IEEE_MAL: &str = "\
Registry,Assignment,Organization Name,Organization Address
MA-L,001122,\"Example Inc\",\"1 Example St US 12345\"
MA-L,00000C,\"Cisco Systems, Inc\",\"170 West Tasman Drive San Jose CA US 95134\"
";

const MANUF: &str = "\
# Wireshark manuf
00:11:22\tEXI\tExample Incorporated
";

const PREFIXES: &str = "AABBCC Prefix Vendor GmbH\n";

const HISTORY: &str = r#"{"001122000000/24": [{"t": "add", "d": "2001-01-01"}]}"#;

fn write_sources(dir: &Path) {
    fs::write(dir.join("ieee_mal.csv"), IEEE_MAL).unwrap();
    fs::write(dir.join("wireshark_manuf.txt"), MANUF).unwrap();
    fs::write(dir.join("nmap_prefixes.txt"), PREFIXES).unwrap();
    fs::write(dir.join("mac_tracker_history.json"), HISTORY).unwrap();
}

#[test]
fn test_build_produces_all_artifacts() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_sources(sources.path());

    let stats = pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(stats.ieee_mal, 2);
    assert_eq!(stats.wireshark, 1);
    assert_eq!(stats.nmap, 1);
    assert_eq!(stats.unique, 3);
    assert_eq!(stats.merged, 1);
    assert_eq!(stats.history_dates, 1);

    for name in [
        output::MASTER_CSV,
        output::MASTER_JSON,
        output::MASTER_MIN_JSON,
        output::MASTER_TSV,
        output::MASTER_TXT,
        output::MASTER_XML,
        output::MASTER_SQL,
        output::MASTER_DB,
        output::STATS_TXT,
    ] {
        assert!(
            output_dir.path().join(name).exists(),
            "missing artifact {name}"
        );
    }
}

#[test]
fn test_merged_record_fields_across_sources() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_sources(sources.path());

    pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    let csv = fs::read_to_string(output_dir.path().join(output::MASTER_CSV)).unwrap();
    // Long-form name table entry overrode the registry name; history date
    // attached; both sources recorded.
    assert!(csv.contains("00:11:22,\"Example Incorporated\",MA-L,EXI,,2001-01-01,\"1 Example St US 12345\",IEEE+Wireshark"));
    // Classification from the name alone.
    assert!(csv.contains("00:00:0C,\"Cisco Systems, Inc\",MA-L,,Router,"));
    // Nmap-only key is present and defaulted.
    assert!(csv.contains("AA:BB:CC,\"Prefix Vendor GmbH\",MA-L,"));
}

#[test]
fn test_missing_optional_sources_are_skipped() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    // Only the two required files.
    fs::write(sources.path().join("wireshark_manuf.txt"), MANUF).unwrap();
    fs::write(sources.path().join("nmap_prefixes.txt"), PREFIXES).unwrap();

    let stats = pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(stats.ieee_total(), 0);
    assert_eq!(stats.history_dates, 0);
    assert_eq!(stats.unique, 2);
}

#[test]
fn test_missing_required_source_fails_the_build() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    fs::write(sources.path().join("ieee_mal.csv"), IEEE_MAL).unwrap();
    fs::write(sources.path().join("wireshark_manuf.txt"), MANUF).unwrap();
    // nmap_prefixes.txt deliberately absent.

    let err = pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Source(SourceError::FileNotFound { .. })
    ));
}

#[test]
fn test_non_hex_prefix_row_survives_the_full_build() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    fs::write(sources.path().join("wireshark_manuf.txt"), MANUF).unwrap();
    // A pass-through token with a multibyte char straddling the sixth
    // byte must flow through every writer without aborting the build.
    fs::write(
        sources.path().join("nmap_prefixes.txt"),
        "AABBCC Prefix Vendor GmbH\nABCDEÀ Odd Vendor\n",
    )
    .unwrap();

    let stats = pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(stats.nmap, 2);
    let txt = fs::read_to_string(output_dir.path().join(output::MASTER_TXT)).unwrap();
    assert!(txt.contains("ABCDEÀ\tOdd Vendor"));
}

#[test]
fn test_corrupt_history_does_not_block_the_build() {
    let sources = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    write_sources(sources.path());
    fs::write(sources.path().join("mac_tracker_history.json"), "not json").unwrap();

    let stats = pipeline::run(&BuildOptions {
        sources_dir: sources.path().to_path_buf(),
        output_dir: output_dir.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(stats.history_dates, 0);
    assert_eq!(stats.unique, 3);
}
