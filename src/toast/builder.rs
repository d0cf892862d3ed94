// SPDX-License-Identifier: MPL-2.0
//! Builds the element subtree of a toast.
//!
//! The class names here are a styling contract: anything rendering or
//! styling toasts keys off them.

use super::color::Rgba;
use crate::dom::{Document, ElementId};

/// Outer element of every toast.
pub const TOAST_CLASS: &str = "toast";
/// Header row, holding the header text and the close control.
pub const HEADER_CLASS: &str = "toast__header";
/// Body text.
pub const BODY_CLASS: &str = "toast__body";
/// Close control; a click on it hides the toast.
pub const CLOSE_CLASS: &str = "toast__close";
/// Present while the toast is shown.
pub const SHOWN_CLASS: &str = "toast_show";
/// Region holding all toasts.
pub const CONTAINER_CLASS: &str = "toasts";

/// Glyph of the close control.
pub const CLOSE_GLYPH: &str = "×";

/// Builds a detached toast:
///
/// ```text
/// div.toast[style=background-color: rgba(..)]
/// ├── div.toast__header  "header"
/// │   └── button.toast__close[type=button]  "×"
/// └── div.toast__body  "body"
/// ```
///
/// `color` is not validated; see [`Rgba::from_hex`].
pub fn create(document: &mut Document, header: &str, body: &str, color: &str) -> ElementId {
    let toast = document.create_element("div");
    document.add_class(toast, TOAST_CLASS);
    document.set_attribute(toast, "style", Rgba::from_hex(color).background_style());

    let header_el = document.create_element("div");
    document.add_class(header_el, HEADER_CLASS);
    document.set_text(header_el, header);

    let close = document.create_element("button");
    document.set_attribute(close, "type", "button");
    document.add_class(close, CLOSE_CLASS);
    document.set_text(close, CLOSE_GLYPH);
    document.append_child(header_el, close);

    let body_el = document.create_element("div");
    document.add_class(body_el, BODY_CLASS);
    document.set_text(body_el, body);

    document.append_child(toast, header_el);
    document.append_child(toast, body_el);
    toast
}

/// First direct child of `toast` carrying `class`.
#[must_use]
pub fn part(document: &Document, toast: ElementId, class: &str) -> Option<ElementId> {
    document
        .children(toast)
        .iter()
        .copied()
        .find(|child| document.has_class(*child, class))
}
