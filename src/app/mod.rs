// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! `App` is the root component of the collection browser. It owns the
//! localization service once the bootstrap registers it, renders the shell,
//! and persists locale switches back to the config file.

pub mod bootstrap;
mod message;
pub mod paths;

pub use bootstrap::{mount, run, start, Mounted};
pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::{I18n, MessageKey};
use crate::ui::shell::{self, ViewContext as ShellViewContext};
use iced::{
    widget::{container, text},
    Element, Length, Task, Theme,
};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: Option<I18n>,
    config: Config,
    /// Where locale changes are saved; `None` uses the default config dir.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field(
                "locale",
                &self.i18n.as_ref().map(|i18n| i18n.current_locale().to_string()),
            )
            .field("theme_mode", &self.config.general.theme_mode)
            .finish()
    }
}

impl App {
    pub fn new(config: Config, config_dir: Option<PathBuf>) -> Self {
        Self {
            i18n: None,
            config,
            config_dir,
        }
    }

    /// Registers the localization service with the component tree.
    pub fn use_localization(&mut self, i18n: I18n) -> &mut Self {
        if self.i18n.is_some() {
            tracing::warn!("replacing an already registered localization service");
        }
        tracing::debug!(locale = %i18n.current_locale(), "localization registered");
        self.i18n = Some(i18n);
        self
    }

    pub fn i18n(&self) -> Option<&I18n> {
        self.i18n.as_ref()
    }

    pub fn has_localization(&self) -> bool {
        self.i18n.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn title(&self) -> String {
        match &self.i18n {
            Some(i18n) => i18n.tr(MessageKey::Header),
            None => MessageKey::Header.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.general.theme_mode.to_iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Shell(shell::Message::LocaleSelected(locale)) => {
                let Some(i18n) = self.i18n.as_mut() else {
                    tracing::warn!(%locale, "locale selected before localization was registered");
                    return Task::none();
                };
                if let Err(err) = i18n.set_locale(locale.clone()) {
                    tracing::warn!(%err, "ignoring locale switch");
                    return Task::none();
                }
                self.config.general.language = Some(locale.to_string());
                if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
                    tracing::error!(%err, "failed to persist language preference");
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.i18n {
            Some(i18n) => shell::view(ShellViewContext { i18n }).map(Message::Shell),
            None => container(text(MessageKey::Loading.as_str()))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, LocalizationOptions, MessageCatalog};
    use tempfile::tempdir;

    fn localized_app(config_dir: PathBuf) -> App {
        let mut app = App::new(Config::default(), Some(config_dir));
        app.use_localization(I18n::new(LocalizationOptions {
            locale: LocaleCode::default_locale(),
            messages: MessageCatalog::embedded().expect("embedded catalog"),
        }));
        app
    }

    fn select(locale: &str) -> Message {
        Message::Shell(shell::Message::LocaleSelected(locale.parse().unwrap()))
    }

    #[test]
    fn new_app_has_no_localization_until_registered() {
        let app = App::new(Config::default(), None);
        assert!(!app.has_localization());
        assert_eq!(app.title(), "header");
    }

    #[test]
    fn title_follows_active_locale() {
        let dir = tempdir().expect("temp dir");
        let mut app = localized_app(dir.path().to_path_buf());
        assert_eq!(app.title(), "Art Institute of Chicago");

        let _ = app.update(select("fr"));
        assert_eq!(app.title(), "Institut d'Art de Chicago");
    }

    #[test]
    fn locale_switch_is_persisted() {
        let dir = tempdir().expect("temp dir");
        let mut app = localized_app(dir.path().to_path_buf());

        let _ = app.update(select("fr"));

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
        assert_eq!(app.config().general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn unsupported_locale_switch_changes_nothing() {
        let dir = tempdir().expect("temp dir");
        let mut app = localized_app(dir.path().to_path_buf());

        let _ = app.update(select("de"));

        assert_eq!(app.i18n().map(|i| i.current_locale().to_string()).as_deref(), Some("en"));
        assert!(app.config().general.language.is_none());
        assert!(!dir.path().join("settings.toml").exists());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = crate::ui::theming::ThemeMode::Light;
        let app = App::new(config, None);
        assert_eq!(app.theme(), Theme::Light);
    }
}
