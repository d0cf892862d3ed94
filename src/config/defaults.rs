// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: whether toasts dismiss themselves and after how long
//! - **Content**: header, body and color used when a caller omits them
//! - **Container**: placement of the region holding all toasts

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Toasts hide themselves unless told otherwise.
pub const DEFAULT_AUTOHIDE: bool = true;

/// Delay before an auto-hiding toast is dismissed (in milliseconds).
pub const DEFAULT_DELAY_MS: u64 = 5000;

/// Shortest delay offered by the demo form (in milliseconds).
pub const MIN_DELAY_MS: u64 = 100;

/// Longest delay offered by the demo form (in milliseconds).
pub const MAX_DELAY_MS: u64 = 600_000;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Header used when neither the caller nor the locale provides one.
pub const DEFAULT_HEADER: &str = "Название заголовка";

/// Body used when neither the caller nor the locale provides one.
pub const DEFAULT_BODY: &str = "Текст сообщения...";

/// Background color before the fixed alpha is applied.
pub const DEFAULT_COLOR: &str = "#ffffff";

// ==========================================================================
// Container Defaults
// ==========================================================================

/// Distance from the top edge of the window (in pixels).
pub const CONTAINER_TOP_PX: u16 = 15;

/// Distance from the right edge of the window (in pixels).
pub const CONTAINER_RIGHT_PX: u16 = 15;

/// Width of the container and of every toast inside it (in pixels).
pub const CONTAINER_WIDTH_PX: u16 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DELAY_MS > 0);
    assert!(MAX_DELAY_MS >= MIN_DELAY_MS);
    assert!(DEFAULT_DELAY_MS >= MIN_DELAY_MS);
    assert!(DEFAULT_DELAY_MS <= MAX_DELAY_MS);

    assert!(CONTAINER_WIDTH_PX > 0);
    assert!(DEFAULT_COLOR.len() == 7);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_defaults_are_valid() {
        assert_eq!(DEFAULT_DELAY_MS, 5000);
        assert!(DEFAULT_DELAY_MS >= MIN_DELAY_MS);
        assert!(DEFAULT_DELAY_MS <= MAX_DELAY_MS);
    }

    #[test]
    fn default_color_is_white() {
        assert_eq!(DEFAULT_COLOR, "#ffffff");
    }
}
