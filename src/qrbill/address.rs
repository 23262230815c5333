//! Freeform address line splitting and field truncation.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum street length in a structured address.
pub const MAX_STREET: usize = 70;
/// Maximum house number length in a structured address.
pub const MAX_HOUSE_NUMBER: usize = 16;

// Text, whitespace, then a token starting with a digit up to end of line.
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+([0-9]\S*)$").expect("static regex is valid"));

/// Split an address line into (street, house number).
///
/// Best effort: "Bahnhofstrasse 12a" becomes ("Bahnhofstrasse", "12a").
/// Without a trailing number the whole line is the street. Results are
/// truncated to [`MAX_STREET`] and [`MAX_HOUSE_NUMBER`] characters.
pub fn split_address(address: &str) -> (String, String) {
    let line = sanitize(address);

    let (street, number) = match TRAILING_NUMBER.captures(&line) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (line.as_str(), ""),
    };

    (
        truncate(street.trim(), MAX_STREET),
        truncate(number, MAX_HOUSE_NUMBER),
    )
}

/// Cut `value` to at most `max` characters (not bytes).
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Replace line breaks with spaces and trim, so a value fits one field.
pub fn sanitize(value: &str) -> String {
    value
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (String, String) {
        split_address(s)
    }

    #[test]
    fn street_with_number() {
        assert_eq!(split("Bahnhofstrasse 12a"), ("Bahnhofstrasse".into(), "12a".into()));
        assert_eq!(split("Seestrasse 5"), ("Seestrasse".into(), "5".into()));
    }

    #[test]
    fn multi_word_street() {
        assert_eq!(
            split("Rue de la Gare 7b"),
            ("Rue de la Gare".into(), "7b".into())
        );
        assert_eq!(split("Im Grund 3 4"), ("Im Grund 3".into(), "4".into()));
    }

    #[test]
    fn no_number() {
        assert_eq!(split("Hauptplatz"), ("Hauptplatz".into(), String::new()));
        assert_eq!(split("12 Main"), ("12 Main".into(), String::new()));
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(split(""), (String::new(), String::new()));
        assert_eq!(split("   "), (String::new(), String::new()));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(split("  Seestrasse   5  "), ("Seestrasse".into(), "5".into()));
    }

    #[test]
    fn long_parts_truncated() {
        let street = "S".repeat(90);
        let number = format!("1{}", "x".repeat(30));
        let (s, n) = split(&format!("{street} {number}"));
        assert_eq!(s.chars().count(), MAX_STREET);
        assert_eq!(n.chars().count(), MAX_HOUSE_NUMBER);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Zürich", 2), "Zü");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn sanitize_removes_line_breaks() {
        assert_eq!(sanitize(" Seestrasse\r\n5 "), "Seestrasse  5");
    }
}
