//! Country enumeration shared with the game-server schema.
//!
//! The game server stores countries as numeric codes; only this fixed set
//! is accepted at registration. Unknown codes can still appear in legacy
//! rows written by other tools, so decoding is lenient.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Countries accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Peru,
    Indonesia,
    Argentina,
    Brasil,
    Usa,
}

static BY_NAME: Lazy<HashMap<&'static str, Country>> = Lazy::new(|| {
    HashMap::from([
        ("Peru", Country::Peru),
        ("Indonesia", Country::Indonesia),
        ("Argentina", Country::Argentina),
        ("Brasil", Country::Brasil),
        ("USA", Country::Usa),
    ])
});

impl Country {
    /// Resolve a submitted country name; exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Resolve a stored numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            157 => Some(Country::Peru),
            91 => Some(Country::Indonesia),
            9 => Some(Country::Argentina),
            28 => Some(Country::Brasil),
            207 => Some(Country::Usa),
            _ => None,
        }
    }

    /// Numeric code as persisted in the schema.
    pub fn code(&self) -> i32 {
        match self {
            Country::Peru => 157,
            Country::Indonesia => 91,
            Country::Argentina => 9,
            Country::Brasil => 28,
            Country::Usa => 207,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Peru => "Peru",
            Country::Indonesia => "Indonesia",
            Country::Argentina => "Argentina",
            Country::Brasil => "Brasil",
            Country::Usa => "USA",
        }
    }

    /// Display name for a stored code, tolerating legacy values.
    pub fn display_name(code: i32) -> &'static str {
        Country::from_code(code).map(|c| c.name()).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_codes() {
        assert_eq!(Country::from_name("Peru").unwrap().code(), 157);
        assert_eq!(Country::from_name("Indonesia").unwrap().code(), 91);
        assert_eq!(Country::from_name("Argentina").unwrap().code(), 9);
        assert_eq!(Country::from_name("Brasil").unwrap().code(), 28);
        assert_eq!(Country::from_name("USA").unwrap().code(), 207);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(Country::from_name("Atlantis").is_none());
        // Exact match only, no case folding
        assert!(Country::from_name("usa").is_none());
    }

    #[test]
    fn codes_roundtrip_through_names() {
        for country in [
            Country::Peru,
            Country::Indonesia,
            Country::Argentina,
            Country::Brasil,
            Country::Usa,
        ] {
            assert_eq!(Country::from_code(country.code()), Some(country));
            assert_eq!(Country::from_name(country.name()), Some(country));
        }
    }

    #[test]
    fn legacy_code_displays_as_unknown() {
        assert_eq!(Country::display_name(42), "Unknown");
        assert_eq!(Country::display_name(207), "USA");
    }
}
