// SPDX-License-Identifier: MPL-2.0
//! Renders the toast container of a document.
//!
//! Only toasts carrying the shown marker are drawn. Each is a fixed-width
//! card tinted with the background from its inline style, with the header
//! and close button on the first row and the body below.

use crate::dom::{Document, ElementId};
use crate::toast::builder::{part, BODY_CLASS, CLOSE_CLASS, HEADER_CLASS, SHOWN_CLASS, TOAST_CLASS};
use crate::toast::Rgba;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Interaction raised by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An element inside a toast was clicked.
    Click(ElementId),
}

/// Toast elements inside `container` that should be drawn, in order.
#[must_use]
pub fn shown_toasts(document: &Document, container: ElementId) -> Vec<ElementId> {
    document
        .children(container)
        .iter()
        .copied()
        .filter(|id| document.has_class(*id, TOAST_CLASS) && document.has_class(*id, SHOWN_CLASS))
        .collect()
}

/// Background of a toast element. Unparseable styles and invalid channels
/// leave the card transparent.
#[must_use]
pub fn background_color(document: &Document, toast: ElementId) -> Color {
    let rgba = document
        .attribute(toast, "style")
        .and_then(Rgba::from_style)
        .filter(Rgba::is_valid);

    match rgba {
        Some(rgba) => Color {
            r: rgba.r.unit().unwrap_or_default(),
            g: rgba.g.unit().unwrap_or_default(),
            b: rgba.b.unit().unwrap_or_default(),
            a: rgba.a.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        },
        None => Color::TRANSPARENT,
    }
}

/// Renders a single toast card.
pub fn view_toast(document: &Document, toast: ElementId) -> Element<'_, Message> {
    let header = part(document, toast, HEADER_CLASS);
    let header_text = header.and_then(|h| document.text(h)).unwrap_or_default();
    let body_text = part(document, toast, BODY_CLASS)
        .and_then(|b| document.text(b))
        .unwrap_or_default();

    let mut header_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(header_text).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(close) = header.and_then(|h| part(document, h, CLOSE_CLASS)) {
        let glyph = document.text(close).unwrap_or_default();
        header_row = header_row.push(
            button(text(glyph).size(typography::BODY))
                .on_press(Message::Click(close))
                .padding(spacing::XXS)
                .style(close_button_style),
        );
    }

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(header_row)
        .push(Text::new(body_text).size(typography::BODY_SM));

    let background = background_color(document, toast);
    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, background))
        .into()
}

/// Renders the container with every shown toast, anchored top-right.
pub fn view_container(document: &Document, container: Option<ElementId>) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = container
        .map(|c| shown_toasts(document, c))
        .unwrap_or_default()
        .into_iter()
        .map(|toast| view_toast(document, toast))
        .collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::TOAST_WIDTH));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(iced::Padding {
            top: sizing::TOAST_OFFSET_TOP,
            right: sizing::TOAST_OFFSET_RIGHT,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

fn toast_container_style(theme: &Theme, background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: crate::ui::design_tokens::border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastParamsOverrides, ToastShelf};

    #[test]
    fn only_shown_toasts_are_drawn() {
        let mut shelf = ToastShelf::new();
        let first = shelf.add(&ToastParamsOverrides::new());
        let second = shelf.add(&ToastParamsOverrides::new());
        shelf.hide(&first);

        let container = shelf.container().expect("container exists");
        assert_eq!(shown_toasts(shelf.document(), container), vec![second.element()]);
    }

    #[test]
    fn background_follows_inline_style() {
        let mut shelf = ToastShelf::new();
        let toast = shelf.add(&ToastParamsOverrides::new().color("#ff0000"));
        let color = background_color(shelf.document(), toast.element());
        assert_eq!(color, Color::from_rgba(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn malformed_color_renders_transparent() {
        let mut shelf = ToastShelf::new();
        let toast = shelf.add(&ToastParamsOverrides::new().color("#zzzzzz"));
        assert_eq!(
            background_color(shelf.document(), toast.element()),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn toast_container_style_uses_background() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme, palette::GRAY_400);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::GRAY_400))
        );
    }

    #[test]
    fn views_build_without_panicking() {
        let mut shelf = ToastShelf::new();
        shelf.add(&ToastParamsOverrides::new());
        let _ = view_container(shelf.document(), shelf.container());
        let _ = view_container(shelf.document(), None);
    }
}
