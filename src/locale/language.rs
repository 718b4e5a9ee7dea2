use std::fmt;
use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};

use crate::holiday::holidayerror::HolidayError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "nl-NL")]
    NlNl,
    #[serde(rename = "nl-BE")]
    NlBe,
    #[serde(rename = "fr-BE")]
    FrBe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "fr-LU")]
    FrLu,
    #[serde(rename = "de-DE")]
    DeDe
}

pub const DEFAULT_LANGUAGE: Language = Language::NlNl;

impl Language {
    pub const ALL: [Language; 7] = [
        Language::EnUs,
        Language::NlNl,
        Language::NlBe,
        Language::FrBe,
        Language::FrFr,
        Language::FrLu,
        Language::DeDe
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::NlNl => "nl-NL",
            Language::NlBe => "nl-BE",
            Language::FrBe => "fr-BE",
            Language::FrFr => "fr-FR",
            Language::FrLu => "fr-LU",
            Language::DeDe => "de-DE"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .find(|l| l.tag() == s)
            .copied()
            .ok_or_else(|| HolidayError::UnsupportedLanguage(s.to_owned()))
    }
}

/// Supplies the language used when a caller does not name one.
pub trait LanguageProvider: Send + Sync {
    fn current_language(&self) -> Language;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedLanguageProvider {
    language: Language
}

impl FixedLanguageProvider {
    pub fn new(language: Language) -> FixedLanguageProvider {
        FixedLanguageProvider { language }
    }
}

impl Default for FixedLanguageProvider {
    fn default() -> Self {
        FixedLanguageProvider::new(DEFAULT_LANGUAGE)
    }
}

impl LanguageProvider for FixedLanguageProvider {
    fn current_language(&self) -> Language {
        self.language
    }
}
