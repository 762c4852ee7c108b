//! Country-code extraction from registry postal addresses.
//!
//! IEEE address strings usually end with `<country> <postal code>`. An
//! ordered list of country-specific patterns anchored near the end of the
//! string is tried first; 3-letter and spelled-out forms are normalized
//! to 2-letter codes via a fixed table. Generic fallbacks catch the rest.
//! Best-effort by design: this only enriches an optional display field.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Country alternates, specific patterns tried in declaration order.
/// The US pattern allows up to 5 postal digits, everything else up to 6.
const COUNTRY_ALTERNATES: &[(&str, usize)] = &[
    ("US|USA", 5),
    ("CN|CHN|China", 6),
    ("TW|TWN|Taiwan", 6),
    ("KR|KOR|Korea", 6),
    ("JP|JPN|Japan", 6),
    ("DE|DEU|Germany", 6),
    ("GB|GBR|UK", 6),
    ("FR|FRA|France", 6),
    ("IT|ITA|Italy", 6),
    ("NL|NLD|Netherlands", 6),
    ("SE|SWE|Sweden", 6),
    ("FI|FIN|Finland", 6),
    ("IN|IND|India", 6),
    ("AU|AUS|Australia", 6),
    ("CA|CAN|Canada", 6),
    ("IL|ISR|Israel", 6),
    ("SG|SGP|Singapore", 6),
    ("HK|HKG|Hong Kong", 6),
    ("VN|VNM|Vietnam", 6),
    ("BR|BRA|Brazil", 6),
    ("MX|MEX|Mexico", 6),
    ("RU|RUS|Russia", 6),
    ("PL|POL|Poland", 6),
    ("CZ|CZE|Czech", 6),
    ("CH|CHE|Switzerland", 6),
    ("AT|AUT|Austria", 6),
    ("BE|BEL|Belgium", 6),
    ("DK|DNK|Denmark", 6),
    ("NO|NOR|Norway", 6),
    ("IE|IRL|Ireland", 6),
    ("ES|ESP|Spain", 6),
    ("PT|PRT|Portugal", 6),
    ("MY|MYS|Malaysia", 6),
    ("TH|THA|Thailand", 6),
    ("PH|PHL|Philippines", 6),
    ("ID|IDN|Indonesia", 6),
    ("ZA|ZAF|South Africa", 6),
    ("AE|ARE|UAE", 6),
    ("SA|SAU|Saudi", 6),
    ("NZ|NZL|New Zealand", 6),
];

/// Long form (lowercased) to 2-letter code.
const NORMALIZE_TABLE: &[(&str, &str)] = &[
    ("usa", "US"),
    ("china", "CN"),
    ("chn", "CN"),
    ("taiwan", "TW"),
    ("twn", "TW"),
    ("korea", "KR"),
    ("kor", "KR"),
    ("japan", "JP"),
    ("jpn", "JP"),
    ("germany", "DE"),
    ("deu", "DE"),
    ("uk", "GB"),
    ("gbr", "GB"),
    ("france", "FR"),
    ("fra", "FR"),
    ("italy", "IT"),
    ("ita", "IT"),
    ("netherlands", "NL"),
    ("nld", "NL"),
    ("sweden", "SE"),
    ("swe", "SE"),
    ("finland", "FI"),
    ("fin", "FI"),
    ("india", "IN"),
    ("ind", "IN"),
    ("australia", "AU"),
    ("aus", "AU"),
    ("canada", "CA"),
    ("can", "CA"),
    ("israel", "IL"),
    ("isr", "IL"),
    ("singapore", "SG"),
    ("sgp", "SG"),
    ("hong kong", "HK"),
    ("hkg", "HK"),
    ("vietnam", "VN"),
    ("vnm", "VN"),
    ("brazil", "BR"),
    ("bra", "BR"),
    ("mexico", "MX"),
    ("mex", "MX"),
    ("russia", "RU"),
    ("rus", "RU"),
    ("poland", "PL"),
    ("pol", "PL"),
    ("czech", "CZ"),
    ("cze", "CZ"),
    ("switzerland", "CH"),
    ("che", "CH"),
    ("austria", "AT"),
    ("aut", "AT"),
    ("belgium", "BE"),
    ("bel", "BE"),
    ("denmark", "DK"),
    ("dnk", "DK"),
    ("norway", "NO"),
    ("nor", "NO"),
    ("ireland", "IE"),
    ("irl", "IE"),
    ("spain", "ES"),
    ("esp", "ES"),
    ("portugal", "PT"),
    ("prt", "PT"),
    ("malaysia", "MY"),
    ("mys", "MY"),
    ("thailand", "TH"),
    ("tha", "TH"),
    ("philippines", "PH"),
    ("phl", "PH"),
    ("indonesia", "ID"),
    ("idn", "ID"),
    ("south africa", "ZA"),
    ("zaf", "ZA"),
    ("uae", "AE"),
    ("are", "AE"),
    ("saudi", "SA"),
    ("sau", "SA"),
    ("new zealand", "NZ"),
    ("nzl", "NZ"),
];

static SPECIFIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COUNTRY_ALTERNATES
        .iter()
        .map(|(alts, max_digits)| {
            RegexBuilder::new(&format!(r"\b({alts})\s*\d{{0,{max_digits}}}\s*$"))
                .case_insensitive(true)
                .build()
                .expect("static country pattern must compile")
        })
        .collect()
});

static NORMALIZE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NORMALIZE_TABLE.iter().copied().collect());

static GENERIC_POSTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([A-Z]{2})\s+\d{4,6}\s*$").expect("static pattern"));
static US_POSTAL: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\bUS\b\s*\d{5}")
        .case_insensitive(true)
        .build()
        .expect("static pattern")
});
static CN_POSTAL: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\bCN\b\s*\d{5,6}")
        .case_insensitive(true)
        .build()
        .expect("static pattern")
});
static TRAILING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([A-Z]{2})\s*$").expect("static pattern"));

/// Extract a 2-letter country code from a free-text postal address.
///
/// Returns `None` when every pattern and fallback fails.
pub fn extract_country(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }

    for pattern in SPECIFIC_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(address) {
            let Some(m) = caps.get(1) else { continue };
            let code = m.as_str().to_uppercase();
            if code.len() > 2 {
                return Some(
                    NORMALIZE
                        .get(code.to_lowercase().as_str())
                        .map(|c| (*c).to_string())
                        .unwrap_or_else(|| code[..2].to_string()),
                );
            }
            return Some(code);
        }
    }

    // Generic "XX 12345" before end of string.
    if let Some(caps) = GENERIC_POSTAL.captures(address) {
        return Some(caps[1].to_string());
    }

    // US/CN postal codes anywhere near the end.
    if US_POSTAL.is_match(address) {
        return Some("US".to_string());
    }
    if CN_POSTAL.is_match(address) {
        return Some("CN".to_string());
    }

    // Bare trailing 2-letter token.
    TRAILING_CODE
        .captures(address)
        .map(|caps| caps[1].to_string())
}
