// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::toast::ToastParamsOverrides;
use crate::ui::toasts;
use std::time::{Duration, Instant};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    HeaderChanged(String),
    BodyChanged(String),
    ColorChanged(String),
    /// Raw text of the delay field, in milliseconds.
    DelayChanged(String),
    AutohideToggled(bool),
    /// Spawn a toast from the current form values.
    AddToast,
    /// Interaction inside the toast overlay.
    Toasts(toasts::Message),
    Tick(Instant), // Periodic tick driving auto-hide timers
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_SHELF_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Header of a toast shown on startup.
    pub header: Option<String>,
    /// Body of a toast shown on startup.
    pub body: Option<String>,
    /// Color of the startup toast and initial form value.
    pub color: Option<String>,
    /// Auto-hide delay in milliseconds for the startup toast.
    pub delay_ms: Option<u64>,
    /// Keep the startup toast until it is closed.
    pub no_autohide: bool,
}

impl Flags {
    /// The toast requested on the command line, if any.
    ///
    /// A toast is only spawned when a header or a body was given; the other
    /// flags refine it.
    #[must_use]
    pub fn startup_toast(&self) -> Option<ToastParamsOverrides> {
        if self.header.is_none() && self.body.is_none() {
            return None;
        }
        let mut overrides = ToastParamsOverrides::new();
        overrides.header = self.header.clone();
        overrides.body = self.body.clone();
        overrides.color = self.color.clone();
        if let Some(ms) = self.delay_ms {
            overrides = overrides.delay(Duration::from_millis(ms));
        }
        if self.no_autohide {
            overrides = overrides.autohide(false);
        }
        Some(overrides)
    }
}
