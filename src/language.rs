//! The display-language enumeration.

use crate::error::ParseLanguageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A UI display language.
///
/// The textual form is the lowercase code (`"fr"`, `"en"`), which is also
/// what gets written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// The code stored in the persisted entry.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// The language's name in that language, for pickers.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Exact match only: `"EN"` or `"en-US"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_french() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Language::ALL[0], Language::default());
    }

    #[test]
    fn parse_accepts_exact_codes_only() {
        assert_eq!("fr".parse::<Language>(), Ok(Language::Fr));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));

        for bad in ["", "xx", "EN", "Fr", "en-US", " en", "fr\n"] {
            assert!(bad.parse::<Language>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn display_matches_code() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string(), lang.code());
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn toggled_swaps() {
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Fr);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            lang: Language,
        }

        let text = toml::to_string(&Wrapper { lang: Language::En }).unwrap();
        assert_eq!(text.trim(), "lang = \"en\"");

        let back: Wrapper = toml::from_str("lang = \"fr\"").unwrap();
        assert_eq!(back.lang, Language::Fr);
    }
}
