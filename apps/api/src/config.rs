use anyhow::{Context, Result};

use crate::i18n::Language;
use crate::layout::font_metrics::PageSize;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Template used when a request does not name one.
    pub default_template: String,
    /// Language used when a request does not name one.
    pub default_language: Language,
    pub page_size: PageSize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            default_template: var("DEFAULT_TEMPLATE", "classic").trim().to_string(),
            default_language: var("DEFAULT_LANGUAGE", "fr")
                .parse::<Language>()
                .context("DEFAULT_LANGUAGE must be one of fr, en, nl")?,
            page_size: var("PAGE_SIZE", "a4")
                .parse::<PageSize>()
                .context("PAGE_SIZE must be 'a4' or 'letter'")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.default_template, "classic");
        assert_eq!(config.default_language, Language::Fr);
        assert_eq!(config.page_size, PageSize::A4);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("DEFAULT_TEMPLATE", "modern"),
            ("DEFAULT_LANGUAGE", "NL"),
            ("PAGE_SIZE", "Letter"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_template, "modern");
        assert_eq!(config.default_language, Language::Nl);
        assert_eq!(config.page_size, PageSize::Letter);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DEFAULT_LANGUAGE", "de")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PAGE_SIZE", "a3")])).is_err());
    }
}
