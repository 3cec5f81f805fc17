// SPDX-License-Identifier: MPL-2.0
//! One-shot application startup.
//!
//! The sequence is fixed: build the message catalog, construct the
//! localization service, construct the root component, register the service
//! with it, then mount it on the host document. Any failure aborts startup.

use super::{App, Flags};
use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::error::{Error, Result};
use crate::host::{AttachmentPoint, HostDocument, Selector};
use crate::i18n::I18n;
use iced::window;

/// A root component attached to its host element, ready to run.
#[derive(Debug)]
pub struct Mounted {
    app: App,
    attachment: AttachmentPoint,
    document: String,
}

impl Mounted {
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn attachment(&self) -> &AttachmentPoint {
        &self.attachment
    }

    /// Name of the host document (path, or the embedded page name).
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Hands the mounted application to the Iced runtime.
    pub fn run(self) -> iced::Result {
        use std::cell::RefCell;

        // Iced requires an `Fn` boot closure but the app is consumed once.
        let boot_state = RefCell::new(Some(self.app));
        let boot = move || {
            boot_state
                .borrow_mut()
                .take()
                .expect("Boot function called more than once")
        };

        iced::application(boot, App::update, App::view)
            .title(App::title)
            .theme(App::theme)
            .window(window_settings())
            .run()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Runs the startup sequence and returns the mounted application.
pub fn start(flags: Flags) -> Result<Mounted> {
    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    if let Some(warning) = warning {
        tracing::warn!(warning = %warning, "configuration could not be loaded, using defaults");
    }

    let selector: Selector = flags
        .mount
        .as_deref()
        .unwrap_or(config.mount.target.as_str())
        .parse()?;
    let document_path = flags.document.clone().or_else(|| config.mount.document.clone());

    let i18n = I18n::from_sources(flags.lang.clone(), flags.i18n_dir.as_deref(), &config)?;
    tracing::info!(
        locale = %i18n.current_locale(),
        available = ?i18n.available_locales(),
        "localization ready"
    );

    let mut app = App::new(config, flags.config_dir);
    app.use_localization(i18n);

    let mut document = match document_path {
        Some(path) => HostDocument::from_path(&path)?,
        None => HostDocument::embedded()?,
    };
    mount(app, &mut document, &selector)
}

/// Attaches `app` to the element of `document` named by `selector`.
pub fn mount(app: App, document: &mut HostDocument, selector: &Selector) -> Result<Mounted> {
    if !app.has_localization() {
        return Err(Error::LocalizationNotRegistered);
    }

    let attachment = document.attach(selector)?;
    tracing::info!(
        document = document.name(),
        selector = %attachment.selector,
        tag = attachment.element.tag.as_str(),
        "application mounted"
    );

    Ok(Mounted {
        app,
        attachment,
        document: document.name().to_string(),
    })
}

/// Starts the application and blocks in the Iced event loop.
pub fn run(flags: Flags) -> Result<()> {
    let mounted = start(flags)?;
    mounted.run()?;
    Ok(())
}
