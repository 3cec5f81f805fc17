// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::shell;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Shell(shell::Message),
}

/// Runtime flags passed from the launcher into the bootstrap.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale code from `--lang`.
    pub lang: Option<String>,
    /// Directory of `.ftl` files from `--i18n-dir`, replacing the embedded catalog.
    pub i18n_dir: Option<PathBuf>,
    /// Config directory from `--config-dir`.
    pub config_dir: Option<PathBuf>,
    /// Host document from `--document`, replacing the embedded page.
    pub document: Option<PathBuf>,
    /// Attachment selector from `--mount`.
    pub mount: Option<String>,
}
