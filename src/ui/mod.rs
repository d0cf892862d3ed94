// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toasts`] - Rendering of the toast container and its toasts

pub mod design_tokens;
pub mod toasts;
