//! Maps semantic label keys to display strings per language.
//!
//! The dictionaries are static; `Localizer::builtin` indexes them once at startup
//! and runs the completeness self-check. Lookups after that are read-only and
//! can be shared across concurrent renders without locking.

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Keys of the section headings emitted by the composer, in document order.
pub const SECTION_KEYS: [&str; 6] = [
    "professional_summary",
    "experience",
    "education",
    "skills",
    "languages",
    "interests",
];

/// Keys that must resolve in every language besides the section keys.
const REQUIRED_UI_KEYS: &[&str] = &[
    "template_classic",
    "template_modern",
    "template_creative",
    "language_fr",
    "language_en",
    "language_nl",
];

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
    Nl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Nl];

    pub fn id(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    /// The language's name written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::Nl => "Nederlands",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Fr => tables::FR,
            Language::En => tables::EN,
            Language::Nl => tables::NL,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == id)
            .ok_or_else(|| AppError::Validation(format!("Unsupported language '{s}'")))
    }
}

/// Read-only label lookup for all supported languages.
#[derive(Debug, Clone)]
pub struct Localizer {
    labels: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Localizer {
    /// Builds the localizer from the static tables and verifies that every
    /// required key resolves to a non-empty label in every language, and that
    /// section headings differ between languages.
    pub fn builtin() -> Result<Self, AppError> {
        let labels = Language::ALL
            .into_iter()
            .map(|lang| (lang, lang.table().iter().copied().collect()))
            .collect();
        let localizer = Localizer { labels };
        localizer.self_check()?;
        Ok(localizer)
    }

    /// Returns the label for `key`, or `key` itself when no label exists.
    pub fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.labels
            .get(&language)
            .and_then(|table| table.get(key).copied())
            .unwrap_or(key)
    }

    fn lookup(&self, key: &str, language: Language) -> Option<&'static str> {
        self.labels
            .get(&language)
            .and_then(|table| table.get(key).copied())
            .filter(|label| !label.trim().is_empty())
    }

    fn self_check(&self) -> Result<(), AppError> {
        for key in SECTION_KEYS.iter().chain(REQUIRED_UI_KEYS) {
            for lang in Language::ALL {
                if self.lookup(key, lang).is_none() {
                    return Err(missing(lang, key));
                }
            }
        }

        for key in SECTION_KEYS {
            for (i, a) in Language::ALL.iter().enumerate() {
                for b in &Language::ALL[i + 1..] {
                    if self.lookup(key, *a) == self.lookup(key, *b) {
                        return Err(missing(*b, key));
                    }
                }
            }
        }
        Ok(())
    }
}

fn missing(language: Language, key: &str) -> AppError {
    AppError::MissingLabel {
        language: language.id().to_string(),
        key: key.to_string(),
    }
}
