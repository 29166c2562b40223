//! Languages a support conversation can be held in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SupportError;

/// A language offered to the customer.
///
/// English is the default. Any other language makes the persona answer in that
/// language's native script and makes the farewell go through a translation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Telugu,
    Hindi,
}

impl Language {
    /// Every offered language, default first.
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    /// Human-readable name, as it appears in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
        }
    }

    /// Whether this is the default language (no directive, no translation).
    pub fn is_default(&self) -> bool {
        *self == Language::default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "telugu" => Ok(Language::Telugu),
            "hindi" => Ok(Language::Hindi),
            _ => Err(SupportError::InvalidLanguage(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::Hindi.is_default());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("telugu".parse::<Language>().unwrap(), Language::Telugu);
        assert_eq!(" HINDI ".parse::<Language>().unwrap(), Language::Hindi);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported language: 'Klingon'");
    }

    #[test]
    fn test_all_starts_with_default() {
        assert_eq!(Language::ALL[0], Language::default());
        assert_eq!(Language::ALL.len(), 3);
    }
}
