//! IBAN normalization and CH/LI shape validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::EncodeError;

static SUPPORTED_IBAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(CH|LI)[0-9]{2}[A-Z0-9]{1,21}$").expect("static regex is valid")
});

/// Strip all whitespace and uppercase.
pub fn normalize_iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Whether a normalized IBAN has Swiss or Liechtenstein shape.
///
/// Shape only; the mod-97 check digits are not verified here.
pub fn is_supported_iban(iban: &str) -> bool {
    SUPPORTED_IBAN.is_match(iban)
}

/// A normalized creditor IBAN accepted by the QR-bill standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    /// Normalize and validate a typed IBAN.
    pub fn parse(raw: &str) -> Result<Self, EncodeError> {
        let iban = normalize_iban(raw);
        if is_supported_iban(&iban) {
            Ok(Self(iban))
        } else {
            Err(EncodeError::UnsupportedIban(iban))
        }
    }

    /// Electronic form, e.g. "CH9300762011623852957".
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// "CH" or "LI".
    pub fn country(&self) -> &str {
        &self.0[..2]
    }

    /// Full ISO 13616 check: mod-97 check digits and national BBAN format.
    ///
    /// Informational: encoding only requires the CH/LI shape.
    pub fn validated(&self) -> Option<iban::Iban> {
        self.0.parse().ok()
    }

    /// Print form in groups of four, e.g. "CH93 0076 2011 6238 5295 7".
    /// `None` when the IBAN fails the full check.
    pub fn formatted(&self) -> Option<String> {
        self.validated().map(|iban| iban.to_string())
    }

    pub fn has_valid_checksum(&self) -> bool {
        self.validated().is_some()
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_spaces_and_uppercases() {
        assert_eq!(
            normalize_iban(" ch93 0076\t2011 6238 5295 7 "),
            "CH9300762011623852957"
        );
    }

    #[test]
    fn swiss_and_liechtenstein_supported() {
        assert!(is_supported_iban("CH9300762011623852957"));
        assert!(is_supported_iban("LI21088100002324013AA"));
    }

    #[test]
    fn other_countries_rejected() {
        assert!(!is_supported_iban("DE89370400440532013000"));
        assert!(!is_supported_iban("AT611904300234573201"));
    }

    #[test]
    fn malformed_rejected() {
        assert!(!is_supported_iban(""));
        assert!(!is_supported_iban("CH"));
        assert!(!is_supported_iban("CH93"));
        assert!(!is_supported_iban("CHAB00762011623852957"));
        assert!(!is_supported_iban("ch9300762011623852957"));
        assert!(!is_supported_iban("CH93007620116238529571234567"));
    }

    #[test]
    fn parse_reports_normalized_value() {
        let err = Iban::parse("de89 3704 0044 0532 0130 00").unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedIban("DE89370400440532013000".into())
        );
    }

    #[test]
    fn formatted_groups() {
        let iban = Iban::parse("CH9300762011623852957").unwrap();
        assert_eq!(iban.formatted().as_deref(), Some("CH93 0076 2011 6238 5295 7"));
        assert_eq!(iban.country(), "CH");
    }

    #[test]
    fn checksum() {
        assert!(Iban::parse("CH9300762011623852957").unwrap().has_valid_checksum());
        assert!(!Iban::parse("CH9400762011623852957").unwrap().has_valid_checksum());
        assert!(Iban::parse("LI21088100002324013AA").unwrap().has_valid_checksum());
    }

    #[test]
    fn failed_check_has_no_print_form() {
        let iban = Iban::parse("CH9400762011623852957").unwrap();
        assert_eq!(iban.formatted(), None);
        assert_eq!(iban.as_str(), "CH9400762011623852957");
    }
}
