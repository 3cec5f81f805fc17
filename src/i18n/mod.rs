// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale resolution, translation file loading, and string lookup.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files, or a directory override
//! - Runtime language switching
//! - Fallback to the default locale, then to the key itself, when a
//!   translation is missing

pub mod catalog;
pub mod fluent;

pub use catalog::MessageCatalog;
pub use fluent::{I18n, LocalizationOptions};

use crate::config::DEFAULT_LOCALE;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language identifier selecting one dictionary of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode(LanguageIdentifier);

impl LocaleCode {
    /// The locale used when nothing else selects one (`en`).
    pub fn default_locale() -> Self {
        // DEFAULT_LOCALE is validated by the tests in `config::defaults`.
        Self(DEFAULT_LOCALE.parse().unwrap_or_default())
    }

    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// Primary language subtag, e.g. `fr` for `fr-CA`.
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| Error::UnsupportedLocale(s.to_string()))
    }
}

impl From<LanguageIdentifier> for LocaleCode {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifiers shared by every locale of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Header,
    AllTypes,
    AllArtists,
    AllDates,
    AllCountries,
    Loading,
    Artist,
    Dimensions,
    Medium,
    Inscriptions,
}

impl MessageKey {
    pub const ALL: [MessageKey; 10] = [
        MessageKey::Header,
        MessageKey::AllTypes,
        MessageKey::AllArtists,
        MessageKey::AllDates,
        MessageKey::AllCountries,
        MessageKey::Loading,
        MessageKey::Artist,
        MessageKey::Dimensions,
        MessageKey::Medium,
        MessageKey::Inscriptions,
    ];

    /// Returns the Fluent message id for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::Header => "header",
            MessageKey::AllTypes => "all_types",
            MessageKey::AllArtists => "all_artists",
            MessageKey::AllDates => "all_dates",
            MessageKey::AllCountries => "all_countries",
            MessageKey::Loading => "loading",
            MessageKey::Artist => "artist",
            MessageKey::Dimensions => "dimensions",
            MessageKey::Medium => "medium",
            MessageKey::Inscriptions => "inscriptions",
        }
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(LocaleCode::default().to_string(), "en");
    }

    #[test]
    fn region_subtag_is_kept_but_language_is_exposed() {
        let locale: LocaleCode = "fr-CA".parse().expect("valid tag");
        assert_eq!(locale.to_string(), "fr-CA");
        assert_eq!(locale.language(), "fr");
    }

    #[test]
    fn malformed_tag_is_unsupported_locale() {
        let err = "not a locale!".parse::<LocaleCode>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLocale(tag) if tag == "not a locale!"));
    }

    #[test]
    fn message_keys_are_unique() {
        let mut ids: Vec<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }
}
