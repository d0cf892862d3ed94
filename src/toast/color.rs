// SPDX-License-Identifier: MPL-2.0
//! Background color derivation for toasts.
//!
//! A `#RRGGBB` string is split into three two-character channels which are
//! read as base-16 integers and composed with a fixed alpha of 0.5. Input is
//! not validated: a channel with no leading hex digit becomes
//! [`Channel::Invalid`], rendered as `NaN` in the inline style.

use std::fmt;

/// Alpha applied to every toast background.
pub const TOAST_ALPHA: f32 = 0.5;

/// One parsed color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Value(i32),
    Invalid,
}

impl Channel {
    /// Reads the leading integer of `raw` in base 16.
    ///
    /// Leading whitespace, a sign and a `0x` prefix are accepted; parsing
    /// stops at the first non-hex character.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned);

        let mut value: Option<i32> = None;
        for c in digits.chars() {
            match c.to_digit(16) {
                Some(d) => value = Some(value.unwrap_or(0).saturating_mul(16).saturating_add(d as i32)),
                None => break,
            }
        }
        match value {
            Some(v) if negative => Channel::Value(-v),
            Some(v) => Channel::Value(v),
            None => Channel::Invalid,
        }
    }

    /// Channel intensity in `0.0..=1.0`, or `None` when invalid.
    #[must_use]
    pub fn unit(self) -> Option<f32> {
        match self {
            Channel::Value(v) => Some(v.clamp(0, 255) as f32 / 255.0),
            Channel::Invalid => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Value(v) => write!(f, "{v}"),
            Channel::Invalid => write!(f, "NaN"),
        }
    }
}

/// A background color as written into a toast's inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
    pub a: f32,
}

impl Rgba {
    /// Decomposes a `#RRGGBB` string. Missing characters yield invalid
    /// channels; this never panics.
    #[must_use]
    pub fn from_hex(color: &str) -> Self {
        Self {
            r: Channel::parse_hex(&substring(color, 1, 2)),
            g: Channel::parse_hex(&substring(color, 3, 2)),
            b: Channel::parse_hex(&substring(color, 5, 2)),
            a: TOAST_ALPHA,
        }
    }

    /// `rgba(r,g,b,a)` functional notation.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Inline style declaring this color as the background.
    #[must_use]
    pub fn background_style(&self) -> String {
        format!("background-color: {}", self.css())
    }

    /// Reads the color back out of a style produced by
    /// [`background_style`](Self::background_style).
    #[must_use]
    pub fn from_style(style: &str) -> Option<Self> {
        let start = style.find("rgba(")? + "rgba(".len();
        let end = start + style[start..].find(')')?;
        let parts: Vec<&str> = style[start..end].split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return None;
        };
        let channel = |raw: &str| match raw.parse::<i32>() {
            Ok(v) => Channel::Value(v),
            Err(_) => Channel::Invalid,
        };
        Some(Self {
            r: channel(*r),
            g: channel(*g),
            b: channel(*b),
            a: a.parse().ok()?,
        })
    }

    /// Whether every channel parsed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| matches!(c, Channel::Value(_)))
    }
}

/// Up to `len` characters of `s` starting at character `start`.
fn substring(s: &str, start: usize, len: usize) -> String {
    s.chars().skip(start).take(len).collect()
}
