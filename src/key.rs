//! Canonical prefix-key normalization.
//!
//! Every address-block identifier in the system is keyed by its canonical
//! form: colon-separated uppercase hex, truncated to the significant bits
//! of the block. Three block widths exist:
//!
//! | Width  | Registry      | Hex digits | Canonical form   |
//! |--------|---------------|------------|------------------|
//! | 24-bit | MA-L (OUI)    | 6          | `AA:BB:CC`       |
//! | 28-bit | MA-M          | 7          | `AA:BB:CC:D`     |
//! | 36-bit | MA-S / IAB    | 9          | `AA:BB:CC:DD:E`  |
//!
//! Normalization is delimiter-insensitive: `AA:BB:CC`, `AA-BB-CC`,
//! `AABBCC`, and `aabbcc` all produce the identical key.

use std::fmt;

use thiserror::Error;

/// Address-block width of a canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockWidth {
    /// 24-bit MA-L block (classic OUI)
    Bits24,
    /// 28-bit MA-M block
    Bits28,
    /// 36-bit MA-S / IAB block
    Bits36,
}

impl BlockWidth {
    /// Number of significant hex digits for this width.
    pub fn hex_digits(self) -> usize {
        match self {
            BlockWidth::Bits24 => 6,
            BlockWidth::Bits28 => 7,
            BlockWidth::Bits36 => 9,
        }
    }

    /// Width from a prefix bit length (24/28/36).
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            24 => Some(BlockWidth::Bits24),
            28 => Some(BlockWidth::Bits28),
            36 => Some(BlockWidth::Bits36),
            _ => None,
        }
    }

    fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            6 => Some(BlockWidth::Bits24),
            7 => Some(BlockWidth::Bits28),
            9 => Some(BlockWidth::Bits36),
            _ => None,
        }
    }
}

/// A raw token could not be reduced to a valid canonical key.
///
/// Callers decide the fallback: ingestion skips the record or passes the
/// raw token through, lookup truncates to 24 bits before ever reaching
/// this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported prefix length {len} for {token:?} (expected 6, 7, or 9 hex digits)")]
pub struct KeyError {
    /// The offending token, as supplied
    pub token: String,
    /// Hex digit count after stripping delimiters
    pub len: usize,
}

/// A normalized prefix key together with the block width it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKey {
    pub key: String,
    pub width: BlockWidth,
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Strip everything that is not a hex digit and uppercase the remainder.
pub fn strip_hex(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Format a stripped, uppercased hex string of the given width as a
/// canonical colon-delimited key.
///
/// Returns `None` if `hex` is shorter than the width requires; extra
/// digits beyond the width are truncated.
pub fn format_prefix(hex: &str, width: BlockWidth) -> Option<String> {
    let n = width.hex_digits();
    if hex.len() < n {
        return None;
    }
    let h = &hex[..n];
    Some(match width {
        BlockWidth::Bits24 => format!("{}:{}:{}", &h[0..2], &h[2..4], &h[4..6]),
        BlockWidth::Bits28 => format!("{}:{}:{}:{}", &h[0..2], &h[2..4], &h[4..6], &h[6..7]),
        BlockWidth::Bits36 => format!(
            "{}:{}:{}:{}:{}",
            &h[0..2],
            &h[2..4],
            &h[4..6],
            &h[6..8],
            &h[8..9]
        ),
    })
}

/// Normalize a raw identifier token into a canonical key.
///
/// Delimiters (`:`, `-`, `.`, whitespace) are stripped, hex digits are
/// uppercased, and the stripped length selects the block width. Any
/// length other than 6, 7, or 9 is a [`KeyError`]; this function never
/// panics on malformed input.
///
/// # Example
///
/// ```
/// use ouidb::key::{normalize, BlockWidth};
///
/// let k = normalize("aa-bb-cc").unwrap();
/// assert_eq!(k.key, "AA:BB:CC");
/// assert_eq!(k.width, BlockWidth::Bits24);
/// ```
pub fn normalize(raw: &str) -> std::result::Result<NormalizedKey, KeyError> {
    let hex = strip_hex(raw);
    let width = BlockWidth::from_hex_len(hex.len()).ok_or_else(|| KeyError {
        token: raw.to_string(),
        len: hex.len(),
    })?;
    // Cannot fail: the length matched the width.
    let key = format_prefix(&hex, width).ok_or_else(|| KeyError {
        token: raw.to_string(),
        len: hex.len(),
    })?;
    Ok(NormalizedKey { key, width })
}

/// Normalize a MAC-like query string to a 24-bit lookup key.
///
/// Lookup-context policy: always take the first 6 hex digits, whatever
/// the total length, so a full 12-digit MAC and a bare OUI both resolve
/// to the same key. Fewer than 6 hex digits is an error.
pub fn normalize_lookup(raw: &str) -> std::result::Result<String, KeyError> {
    let hex = strip_hex(raw);
    format_prefix(&hex, BlockWidth::Bits24).ok_or_else(|| KeyError {
        token: raw.to_string(),
        len: hex.len(),
    })
}
