// SPDX-License-Identifier: MPL-2.0
//! Per-locale message dictionaries backed by Fluent bundles.
//!
//! Each locale is one `<locale>.ftl` resource. The embedded set ships inside
//! the binary; [`MessageCatalog::from_dir`] loads the same layout from disk.

use super::{LocaleCode, MessageKey};
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FTL_EXTENSION: &str = ".ftl";

/// All per-locale dictionaries known to the application.
pub struct MessageCatalog {
    bundles: HashMap<LocaleCode, FluentBundle<FluentResource>>,
    locales: Vec<LocaleCode>,
}

impl std::fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locales", &self.locales)
            .finish()
    }
}

impl MessageCatalog {
    fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
            locales: Vec::new(),
        }
    }

    /// Loads the dictionaries compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::empty();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                catalog.insert(locale, source)?;
            }
        }
        tracing::debug!(locales = ?catalog.locales, "loaded embedded message catalog");
        Ok(catalog)
    }

    /// Loads every `<locale>.ftl` file found directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::empty();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(locale) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(locale_from_filename)
            else {
                continue;
            };
            let source = fs::read_to_string(&path)?;
            catalog.insert(locale, source)?;
        }
        tracing::debug!(dir = %dir.display(), locales = ?catalog.locales, "loaded message catalog");
        Ok(catalog)
    }

    /// Builds a catalog from in-memory Fluent sources.
    pub fn from_sources<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (LocaleCode, S)>,
        S: Into<String>,
    {
        let mut catalog = Self::empty();
        for (locale, source) in sources {
            catalog.insert(locale, source.into())?;
        }
        Ok(catalog)
    }

    /// Adds or replaces the dictionary of `locale`.
    pub fn insert(&mut self, locale: LocaleCode, source: String) -> Result<()> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::Catalog(format!("{}: {:?}", locale, errors))
        })?;

        let mut bundle = FluentBundle::new(vec![locale.language_identifier().clone()]);
        // Values must come back verbatim, without bidi isolation marks.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::Catalog(format!("{}: {:?}", locale, errors)))?;

        if self.bundles.insert(locale.clone(), bundle).is_none() {
            self.locales.push(locale);
            self.locales.sort_by_key(|l| l.to_string());
        }
        Ok(())
    }

    /// Locales in a stable (alphabetical) order.
    pub fn locales(&self) -> &[LocaleCode] {
        &self.locales
    }

    pub fn contains_locale(&self, locale: &LocaleCode) -> bool {
        self.bundles.contains_key(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Formats `key` in `locale`. Returns `None` when the locale or the key
    /// is absent, or when the message cannot be formatted cleanly.
    pub fn get(&self, locale: &LocaleCode, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::warn!(%locale, key, ?errors, "failed to format message");
            None
        }
    }

    /// Keys of the shared key set that `locale` does not define.
    pub fn missing_keys(&self, locale: &LocaleCode) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| self.get(locale, key.as_str()).is_none())
            .collect()
    }

    /// Logs a warning for every locale that lacks part of the key set.
    /// Returns `true` when every locale is complete.
    pub fn check_key_parity(&self) -> bool {
        let mut complete = true;
        for locale in &self.locales {
            let missing = self.missing_keys(locale);
            if !missing.is_empty() {
                complete = false;
                tracing::warn!(%locale, ?missing, "locale does not define the full key set");
            }
        }
        complete
    }
}

fn locale_from_filename(filename: &str) -> Option<LocaleCode> {
    let stem = filename.strip_suffix(FTL_EXTENSION)?;
    match stem.parse::<LocaleCode>() {
        Ok(locale) => Some(locale),
        Err(_) => {
            tracing::debug!(filename, "skipping resource with non-locale name");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn en() -> LocaleCode {
        "en".parse().unwrap()
    }

    fn fr() -> LocaleCode {
        "fr".parse().unwrap()
    }

    #[test]
    fn embedded_catalog_ships_english_and_french() {
        let catalog = MessageCatalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.locales(), &[en(), fr()]);
    }

    #[test]
    fn embedded_catalog_has_key_parity() {
        let catalog = MessageCatalog::embedded().expect("embedded catalog");
        assert!(catalog.check_key_parity());
        for locale in catalog.locales() {
            assert!(catalog.missing_keys(locale).is_empty(), "{locale} incomplete");
        }
    }

    #[test]
    fn french_values_keep_trailing_spaces() {
        let catalog = MessageCatalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.get(&fr(), "artist").as_deref(), Some("Artiste "));
        assert_eq!(catalog.get(&fr(), "dimensions").as_deref(), Some("Dimensions "));
        assert_eq!(catalog.get(&fr(), "medium").as_deref(), Some("Médium "));
        assert_eq!(catalog.get(&fr(), "inscriptions").as_deref(), Some("Inscriptions "));
        assert_eq!(catalog.get(&en(), "artist").as_deref(), Some("Artist"));
    }

    #[test]
    fn unknown_locale_or_key_is_none() {
        let catalog = MessageCatalog::embedded().expect("embedded catalog");
        assert!(catalog.get(&"de".parse().unwrap(), "header").is_none());
        assert!(catalog.get(&en(), "no_such_key").is_none());
    }

    #[test]
    fn from_sources_reports_missing_keys() {
        let catalog = MessageCatalog::from_sources([
            (en(), "header = Header\nloading = Loading...\n"),
        ])
        .expect("valid source");

        let missing = catalog.missing_keys(&en());
        assert!(!missing.contains(&MessageKey::Header));
        assert!(missing.contains(&MessageKey::Artist));
        assert!(!catalog.check_key_parity());
    }

    #[test]
    fn invalid_fluent_source_is_catalog_error() {
        let result = MessageCatalog::from_sources([(en(), "header = \n= broken")]);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn from_dir_loads_ftl_files_and_skips_others() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("en.ftl"), "header = Art\n").expect("write en");
        fs::write(dir.path().join("de.ftl"), "header = Kunst\n").expect("write de");
        fs::write(dir.path().join("README.md"), "not a resource").expect("write readme");

        let catalog = MessageCatalog::from_dir(dir.path()).expect("load dir");
        let locales: Vec<String> = catalog.locales().iter().map(|l| l.to_string()).collect();
        assert_eq!(locales, vec!["de", "en"]);
        assert_eq!(catalog.get(&"de".parse().unwrap(), "header").as_deref(), Some("Kunst"));
    }

    #[test]
    fn from_missing_dir_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = MessageCatalog::from_dir(&dir.path().join("absent"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
