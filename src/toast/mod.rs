// SPDX-License-Identifier: MPL-2.0
//! Transient notification toasts.
//!
//! # Components
//!
//! - [`builder`] - builds the element subtree and defines the class contract
//! - [`color`] - `#RRGGBB` to half-transparent background conversion
//! - [`config`] - instance configuration and factory parameters
//! - [`instance`] - `Toast`, bound to one element, with `show` / `hide`
//! - [`shelf`] - `ToastShelf`, the container owner and spawning entry point
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use toast_shelf::toast::{ToastParamsOverrides, ToastShelf};
//!
//! let mut shelf = ToastShelf::new();
//! let toast = shelf.add(
//!     &ToastParamsOverrides::new()
//!         .header("Saved")
//!         .body("All changes written")
//!         .color("#43b367")
//!         .delay(Duration::from_millis(100)),
//! );
//! assert!(toast.is_shown(shelf.document()));
//!
//! shelf.tick(Instant::now() + Duration::from_secs(1));
//! assert!(!toast.is_shown(shelf.document()));
//! ```

pub mod builder;
pub mod color;
pub mod config;
pub mod instance;
pub mod shelf;

pub use builder::create;
pub use color::{Channel, Rgba};
pub use config::{ToastConfig, ToastOverrides, ToastParams, ToastParamsOverrides};
pub use instance::{Toast, HIDDEN_EVENT};
pub use shelf::{ContainerSlot, Dismissal, ToastShelf};
