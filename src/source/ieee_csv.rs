//! IEEE registry CSV parser.
//!
//! Format: one header line, then `Registry,Assignment,Organization
//! Name,Organization Address` per line. The last two fields may be
//! double-quoted with embedded commas and doubled quotes.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::RawRecord;
use crate::key::normalize;
use crate::record::Registry;

/// Escaped 4-field CSV line: plain field, assignment, then two fields
/// that are either quoted (with `""` escapes) or comma-free.
static CSV_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^,]*),([^,"]*|"[^"]*"),("(?:[^"]|"")*"|[^,]*),("(?:[^"]|"")*"|[^,]*)"#)
        .expect("static CSV pattern must compile")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Parse a whole IEEE registry CSV body.
///
/// `default_registry` labels rows whose registry column is empty — each
/// IEEE file covers exactly one registry, so the file identity is the
/// fallback.
pub fn parse_ieee_csv(content: &str, default_registry: Registry) -> Vec<RawRecord> {
    content
        .lines()
        .skip(1) // header
        .filter_map(|line| parse_line(line, default_registry))
        .collect()
}

fn parse_line(line: &str, default_registry: Registry) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let caps = match CSV_LINE.captures(line) {
        Some(caps) => caps,
        None => {
            debug!(line, "skipping unparsable registry CSV line");
            return None;
        }
    };

    let registry = Registry::parse(caps[1].trim()).unwrap_or(default_registry);
    let assignment = caps[2].trim().replace('"', "").to_uppercase();
    let org_name = clean_org_name(&caps[3].replace('"', ""));
    let address = caps[4].trim().replace('"', "");

    if assignment.is_empty() || org_name.is_empty() {
        debug!(line, "skipping registry CSV line without assignment or name");
        return None;
    }

    // Unrecognized assignment lengths fall back to the raw string as the
    // key; they cannot collide with canonical colon-delimited keys.
    let key = normalize(&assignment)
        .map(|k| k.key)
        .unwrap_or(assignment);

    Some(RawRecord {
        key,
        manufacturer: org_name,
        registry: Some(registry),
        address: (!address.is_empty()).then_some(address),
        ..RawRecord::default()
    })
}

/// Strip a trailing comma and collapse internal whitespace runs.
fn clean_org_name(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(',');
    WHITESPACE_RUN.replace_all(trimmed, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Registry,Assignment,Organization Name,Organization Address
MA-L,00000C,\"Cisco Systems, Inc\",\"170 West Tasman Drive San Jose CA US 95134\"
MA-L,001122,Example Inc,\"1 Example St US 12345\"
";

    #[test]
    fn test_parse_quoted_fields() {
        let records = parse_ieee_csv(SAMPLE, Registry::MaL);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "00:00:0C");
        assert_eq!(records[0].manufacturer, "Cisco Systems, Inc");
        assert_eq!(
            records[0].address.as_deref(),
            Some("170 West Tasman Drive San Jose CA US 95134")
        );
        assert_eq!(records[0].registry, Some(Registry::MaL));
    }

    #[test]
    fn test_registry_column_overrides_default() {
        let csv = "header\nMA-M,0050C27,Acme,\"Somewhere DE 80331\"\n";
        let records = parse_ieee_csv(csv, Registry::MaL);
        assert_eq!(records[0].registry, Some(Registry::MaM));
        assert_eq!(records[0].key, "00:50:C2:7");
    }

    #[test]
    fn test_empty_registry_column_uses_default() {
        let csv = "header\n,001122,Acme,\"Somewhere\"\n";
        let records = parse_ieee_csv(csv, Registry::Cid);
        assert_eq!(records[0].registry, Some(Registry::Cid));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let csv = "header\n\n,,,\nMA-L,,No Assignment,\"addr\"\nMA-L,001122,,\"addr\"\nMA-L,001123,Good,\"addr\"\n";
        let records = parse_ieee_csv(csv, Registry::MaL);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "00:11:23");
    }

    #[test]
    fn test_unrecognized_assignment_length_passes_through() {
        let csv = "header\nMA-L,0011,Shorty,\"addr\"\n";
        let records = parse_ieee_csv(csv, Registry::MaL);
        assert_eq!(records[0].key, "0011");
    }

    #[test]
    fn test_org_name_whitespace_collapsed() {
        let csv = "header\nMA-L,001122,\"Spaced   Out  Corp,\",\"addr\"\n";
        let records = parse_ieee_csv(csv, Registry::MaL);
        assert_eq!(records[0].manufacturer, "Spaced Out Corp");
    }

    #[test]
    fn test_36_bit_assignment() {
        let csv = "header\nMA-S,70B3D5ABC,Tiny Block LLC,\"addr\"\n";
        let records = parse_ieee_csv(csv, Registry::MaS);
        assert_eq!(records[0].key, "70:B3:D5:AB:C");
    }
}
