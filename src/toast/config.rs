// SPDX-License-Identifier: MPL-2.0
//! Toast configuration and factory parameters.
//!
//! Callers describe only what they want to change through the `*Overrides`
//! types; merging them onto defaults yields the effective values. Keys the
//! crate does not know are kept in `extra` untouched and never read.

use crate::config::defaults::{
    DEFAULT_AUTOHIDE, DEFAULT_BODY, DEFAULT_COLOR, DEFAULT_DELAY_MS, DEFAULT_HEADER,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Unrecognized configuration keys, preserved verbatim.
pub type Extra = BTreeMap<String, toml::Value>;

/// Effective configuration of one toast instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig {
    pub autohide: bool,
    pub delay: Duration,
    pub extra: Extra,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            autohide: DEFAULT_AUTOHIDE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            extra: Extra::new(),
        }
    }
}

impl ToastConfig {
    /// Overlays `overrides` onto `self`; values present in `overrides` win.
    #[must_use]
    pub fn merged(&self, overrides: &ToastOverrides) -> Self {
        let mut extra = self.extra.clone();
        extra.extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            autohide: overrides.autohide.unwrap_or(self.autohide),
            delay: overrides
                .delay
                .map_or(self.delay, Duration::from_millis),
            extra,
        }
    }
}

/// Partial instance configuration. `delay` is in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autohide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ToastOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn autohide(mut self, autohide: bool) -> Self {
        self.autohide = Some(autohide);
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(duration_to_millis(delay));
        self
    }
}

/// Effective parameters of [`ToastShelf::add`](super::ToastShelf::add).
#[derive(Debug, Clone, PartialEq)]
pub struct ToastParams {
    pub header: String,
    pub body: String,
    pub color: String,
    pub autohide: bool,
    pub delay: Duration,
    pub extra: Extra,
}

impl Default for ToastParams {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            body: DEFAULT_BODY.to_string(),
            color: DEFAULT_COLOR.to_string(),
            autohide: DEFAULT_AUTOHIDE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            extra: Extra::new(),
        }
    }
}

impl ToastParams {
    /// Overlays `overrides` onto `self`; values present in `overrides` win.
    #[must_use]
    pub fn merged(&self, overrides: &ToastParamsOverrides) -> Self {
        let mut extra = self.extra.clone();
        extra.extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            header: overrides.header.clone().unwrap_or_else(|| self.header.clone()),
            body: overrides.body.clone().unwrap_or_else(|| self.body.clone()),
            color: overrides.color.clone().unwrap_or_else(|| self.color.clone()),
            autohide: overrides.autohide.unwrap_or(self.autohide),
            delay: overrides
                .delay
                .map_or(self.delay, Duration::from_millis),
            extra,
        }
    }

    /// The instance-level part handed to the toast. Extra keys stay here.
    #[must_use]
    pub fn instance_overrides(&self) -> ToastOverrides {
        ToastOverrides::new()
            .autohide(self.autohide)
            .delay(self.delay)
    }
}

/// Partial factory parameters. `delay` is in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToastParamsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autohide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ToastParamsOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn autohide(mut self, autohide: bool) -> Self {
        self.autohide = Some(autohide);
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(duration_to_millis(delay));
        self
    }

    /// Stores a key the factory does not interpret.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

fn duration_to_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_keep_defaults() {
        let config = ToastConfig::default().merged(&ToastOverrides::new());
        assert!(config.autohide);
        assert_eq!(config.delay, Duration::from_millis(5000));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn explicit_keys_override_defaults() {
        let config = ToastConfig::default()
            .merged(&ToastOverrides::new().autohide(false).delay(Duration::from_millis(250)));
        assert!(!config.autohide);
        assert_eq!(config.delay, Duration::from_millis(250));
    }

    #[test]
    fn absent_keys_retain_defaults() {
        let config = ToastConfig::default().merged(&ToastOverrides::new().autohide(false));
        assert_eq!(config.delay, Duration::from_millis(5000));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let overrides: ToastOverrides =
            toml::from_str("delay = 100\nposition = \"bottom\"").expect("valid toml");
        let config = ToastConfig::default().merged(&overrides);
        assert_eq!(config.delay, Duration::from_millis(100));
        assert_eq!(
            config.extra.get("position"),
            Some(&toml::Value::String("bottom".into()))
        );
    }

    #[test]
    fn merge_copies_values() {
        let mut overrides = ToastOverrides::new().delay(Duration::from_millis(100));
        let config = ToastConfig::default().merged(&overrides);
        overrides.delay = Some(9999);
        assert_eq!(config.delay, Duration::from_millis(100));
    }

    #[test]
    fn params_defaults_match_documented_table() {
        let params = ToastParams::default();
        assert_eq!(params.header, "Название заголовка");
        assert_eq!(params.body, "Текст сообщения...");
        assert_eq!(params.color, "#ffffff");
        assert!(params.autohide);
        assert_eq!(params.delay, Duration::from_millis(5000));
    }

    #[test]
    fn params_merge_overlays_every_field() {
        let params = ToastParams::default().merged(
            &ToastParamsOverrides::new()
                .header("H")
                .body("B")
                .color("#112233")
                .autohide(false)
                .delay(Duration::from_millis(100))
                .extra("icon", "bell"),
        );
        assert_eq!(params.header, "H");
        assert_eq!(params.body, "B");
        assert_eq!(params.color, "#112233");
        assert!(!params.autohide);
        assert_eq!(params.delay, Duration::from_millis(100));
        assert!(params.extra.contains_key("icon"));
    }

    #[test]
    fn instance_overrides_carry_only_autohide_and_delay() {
        let params = ToastParams::default().merged(
            &ToastParamsOverrides::new()
                .delay(Duration::from_millis(100))
                .extra("icon", "bell"),
        );
        let overrides = params.instance_overrides();
        assert_eq!(overrides.autohide, Some(true));
        assert_eq!(overrides.delay, Some(100));
        assert!(overrides.extra.is_empty());
    }

    #[test]
    fn params_overrides_deserialize_from_toml() {
        let overrides: ToastParamsOverrides =
            toml::from_str("header = \"H\"\ncolor = \"#000000\"\nsticky = true").expect("valid toml");
        assert_eq!(overrides.header.as_deref(), Some("H"));
        assert_eq!(overrides.color.as_deref(), Some("#000000"));
        assert!(overrides.body.is_none());
        assert_eq!(overrides.extra.get("sticky"), Some(&toml::Value::Boolean(true)));
    }
}
