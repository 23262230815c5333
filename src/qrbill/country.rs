//! Country resolution for structured addresses.
//!
//! The sender's country is typed as free text ("Schweiz", "Switzerland",
//! "CH"); the payload needs an ISO 3166-1 alpha-2 code.

/// Fallback when no country can be resolved.
pub(crate) const DEFAULT_COUNTRY: &str = "CH";

/// Check whether `code` is a known ISO 3166-1 alpha-2 country code.
pub fn is_known_country_code(code: &str) -> bool {
    COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Map a country name or code to an ISO alpha-2 code, defaulting to "CH".
///
/// Two-letter known codes pass through uppercased; common German, French,
/// Italian and English names of neighbouring countries are recognized.
pub fn resolve_country(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_COUNTRY.to_string();
    }

    let upper = trimmed.to_uppercase();
    if upper.chars().count() == 2 && is_known_country_code(&upper) {
        return upper;
    }

    let lower = trimmed.to_lowercase();
    COUNTRY_NAMES
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
        .map_or(DEFAULT_COUNTRY, |&(_, code)| code)
        .to_string()
}

static COUNTRY_NAMES: &[(&[&str], &str)] = &[
    (&["schweiz", "switzerland", "suisse", "svizzera", "svizra"], "CH"),
    (&["liechtenstein", "fürstentum liechtenstein"], "LI"),
    (&["deutschland", "germany", "allemagne", "germania"], "DE"),
    (&["österreich", "oesterreich", "austria", "autriche"], "AT"),
    (&["frankreich", "france", "francia"], "FR"),
    (&["italien", "italy", "italie", "italia"], "IT"),
];

/// ISO 3166-1 alpha-2 codes, sorted for binary search.
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];
