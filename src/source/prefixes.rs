//! Space-delimited prefix-table parser (Nmap `nmap-mac-prefixes` format).
//!
//! Lines look like `00000C Cisco Systems`; the first whitespace run
//! separates the prefix token from the manufacturer name.

use super::RawRecord;
use crate::key::{format_prefix, BlockWidth};

/// Parse a whole prefix-table body.
pub fn parse_prefixes(content: &str) -> Vec<RawRecord> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (token, rest) = line.split_once(char::is_whitespace)?;
    let manufacturer = rest.trim().to_string();
    if manufacturer.is_empty() {
        return None;
    }

    let prefix = token.trim().to_uppercase();
    // Only exact 6-hex tokens are formatted; anything else passes through
    // raw, where it cannot collide with canonical colon-delimited keys.
    let key = if prefix.len() == 6 && prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        format_prefix(&prefix, BlockWidth::Bits24)?
    } else {
        prefix
    };

    Some(RawRecord {
        key,
        manufacturer,
        ..RawRecord::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let txt = "# header comment\n00000C Cisco Systems\n001122 Example Inc\n";
        let records = parse_prefixes(txt);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "00:00:0C");
        assert_eq!(records[0].manufacturer, "Cisco Systems");
        assert_eq!(records[1].key, "00:11:22");
    }

    #[test]
    fn test_non_six_hex_token_passes_through() {
        let txt = "XYZ123 Odd Vendor\n0050C27 Seven Digits Inc\n";
        let records = parse_prefixes(txt);
        assert_eq!(records[0].key, "XYZ123");
        assert_eq!(records[1].key, "0050C27");
    }

    #[test]
    fn test_lines_without_name_are_skipped() {
        let txt = "001122\n001123   \n001124 Named\n";
        let records = parse_prefixes(txt);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "00:11:24");
    }
}
