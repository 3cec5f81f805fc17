// SPDX-License-Identifier: MPL-2.0
//! The localization service handed to the application root.

use super::{LocaleCode, MessageCatalog};
use crate::config::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Construction options, given once at startup.
#[derive(Debug)]
pub struct LocalizationOptions {
    /// Initial active locale.
    pub locale: LocaleCode,
    /// Full set of per-locale dictionaries.
    pub messages: MessageCatalog,
}

/// Looks up message keys in the active locale.
#[derive(Debug)]
pub struct I18n {
    catalog: MessageCatalog,
    current_locale: LocaleCode,
    default_locale: LocaleCode,
}

impl I18n {
    pub fn new(options: LocalizationOptions) -> Self {
        let LocalizationOptions { locale, messages } = options;
        let default_locale = LocaleCode::default_locale();

        if !messages.contains_locale(&default_locale) {
            tracing::warn!(%default_locale, "default locale is missing from the catalog");
        }
        messages.check_key_parity();

        let current_locale = if messages.contains_locale(&locale) {
            locale
        } else {
            tracing::warn!(
                requested = %locale,
                fallback = %default_locale,
                "requested locale is not in the catalog"
            );
            default_locale.clone()
        };

        Self {
            catalog: messages,
            current_locale,
            default_locale,
        }
    }

    /// Builds the service from the usual startup sources: an optional
    /// translation directory, then the CLI/config locale preferences.
    ///
    /// Without either preference the service starts in the default locale.
    pub fn from_sources(
        cli_lang: Option<String>,
        i18n_dir: Option<&Path>,
        config: &Config,
    ) -> Result<Self> {
        let messages = match i18n_dir {
            Some(dir) => MessageCatalog::from_dir(dir)?,
            None => MessageCatalog::embedded()?,
        };
        if messages.is_empty() {
            return Err(Error::Catalog("no locale dictionaries found".to_string()));
        }
        let locale = resolve_locale(cli_lang, config, messages.locales())
            .unwrap_or_else(LocaleCode::default_locale);
        Ok(Self::new(LocalizationOptions { locale, messages }))
    }

    pub fn current_locale(&self) -> &LocaleCode {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LocaleCode] {
        self.catalog.locales()
    }

    /// Switches the active locale. Regional tags resolve to their language
    /// (`fr-CA` → `fr`); unknown locales leave it unchanged.
    pub fn set_locale(&mut self, locale: LocaleCode) -> Result<()> {
        let locale = match_locale(&locale, self.catalog.locales())
            .ok_or_else(|| Error::UnsupportedLocale(locale.to_string()))?;
        if locale != self.current_locale {
            tracing::info!(from = %self.current_locale, to = %locale, "switching locale");
            self.current_locale = locale;
        }
        Ok(())
    }

    /// Looks up `key` in the active locale.
    ///
    /// A miss is logged, then resolved against the default locale, and
    /// finally answered with the key itself.
    pub fn tr(&self, key: impl AsRef<str>) -> String {
        let key = key.as_ref();
        match self.try_tr(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "translation lookup missed");
                self.catalog
                    .get(&self.default_locale, key)
                    .unwrap_or_else(|| key.to_string())
            }
        }
    }

    /// Looks up `key` in the active locale only.
    pub fn try_tr(&self, key: impl AsRef<str>) -> Result<String> {
        self.tr_in(&self.current_locale, key)
    }

    /// Looks up `key` in an explicit locale, without fallback.
    pub fn tr_in(&self, locale: &LocaleCode, key: impl AsRef<str>) -> Result<String> {
        let key = key.as_ref();
        self.catalog
            .get(locale, key)
            .ok_or_else(|| Error::MissingTranslationKey {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }
}

/// Picks the first supported locale from the CLI, then the config file.
pub(crate) fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LocaleCode],
) -> Option<LocaleCode> {
    if let Some(locale) = cli_lang.as_deref().and_then(|lang| match_available(lang, available)) {
        return Some(locale);
    }

    config
        .general
        .language
        .as_deref()
        .and_then(|lang| match_available(lang, available))
}

fn match_available(requested: &str, available: &[LocaleCode]) -> Option<LocaleCode> {
    let requested = requested.parse::<LocaleCode>().ok()?;
    match_locale(&requested, available)
}

/// Matches a locale exactly, or by primary language (`fr-FR` → `fr`).
fn match_locale(requested: &LocaleCode, available: &[LocaleCode]) -> Option<LocaleCode> {
    if available.contains(requested) {
        return Some(requested.clone());
    }
    available
        .iter()
        .find(|locale| locale.language() == requested.language())
        .cloned()
}
