// SPDX-License-Identifier: MPL-2.0
//! `artic_gallery` is the localized shell of a browser for the Art Institute
//! of Chicago collection, built with the Iced GUI framework.
//!
//! Startup builds a Fluent message catalog (English and French), wraps it in
//! a localization service, hands that service to the root component, and
//! mounts the component on an element of a host document.

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod i18n;
pub mod ui;
