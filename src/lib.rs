// SPDX-License-Identifier: MPL-2.0
//! `toast_shelf` is a toast notification widget built with the Iced GUI framework.
//!
//! Toasts are built as element subtrees inside an in-memory [`dom::Document`],
//! stacked in a fixed top-right container and dismissed either by their close
//! control or by an auto-hide timer driven from [`timer::Scheduler`].

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod session;
pub mod timer;
pub mod toast;
pub mod ui;
