//! Tab-delimited name-table parser (Wireshark `manuf` format).
//!
//! Lines look like `00:00:0C<TAB>Cisco<TAB>Cisco Systems, Inc # comment`;
//! the long name and its trailing `#` comment are optional. Blank lines
//! and `#` comment lines are skipped.

use tracing::debug;

use super::RawRecord;
use crate::key::{format_prefix, strip_hex, BlockWidth};

/// Parse a whole name-table body.
pub fn parse_manuf(content: &str) -> Vec<RawRecord> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split('\t');
    let token = fields.next()?.trim().to_uppercase();
    let short_name = fields.next().map(str::trim).filter(|s| !s.is_empty())?;
    let long_name = fields
        .next()
        .map(|s| s.split('#').next().unwrap_or("").trim())
        .filter(|s| !s.is_empty());

    let Some(key) = normalize_token(&token) else {
        debug!(token, "skipping name-table line with unusable key token");
        return None;
    };

    // Long-form name preferred for display when present.
    let manufacturer = long_name.unwrap_or(short_name).to_string();

    Some(RawRecord {
        key,
        manufacturer,
        short_name: Some(short_name.to_string()),
        long_name: long_name.map(str::to_string),
        ..RawRecord::default()
    })
}

/// Key tokens already containing `:` pass through as-is (uppercased);
/// bare 6/7/9-hex tokens collapse to their 24-bit key. Wider blocks in
/// this source are folded onto the covering MA-L prefix, matching how
/// the merged table resolves lookups.
fn normalize_token(token: &str) -> Option<String> {
    if token.contains(':') {
        return Some(token.to_string());
    }
    let hex = strip_hex(token);
    match hex.len() {
        6 | 7 | 9 => format_prefix(&hex, BlockWidth::Bits24),
        _ => None,
    }
}
