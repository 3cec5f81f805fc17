// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`shell`] - Localized page frame rendered by the root component
//! - [`design_tokens`] - Spacing and typography scales
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod shell;
pub mod theming;
