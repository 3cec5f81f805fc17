// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when nothing else selects one, and the reference key set
/// every other locale is checked against.
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================================================
// Mount Defaults
// ==========================================================================

/// Selector of the host element the application attaches to.
pub const DEFAULT_MOUNT_TARGET: &str = "#app";

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(DEFAULT_MOUNT_TARGET.len() > 1);
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
