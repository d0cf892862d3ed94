// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window shows a small form for composing toasts, with the toast
//! overlay stacked on top of it.

use super::{FormState, Message};
use crate::i18n::fluent::I18n;
use crate::toast::ToastShelf;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toasts;
use iced::widget::{button, checkbox, text, text_input, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    pub shelf: &'a ToastShelf,
}

/// Renders the form with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Container::new(view_form(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

    let overlay = toasts::view_container(ctx.shelf.document(), ctx.shelf.container())
        .map(Message::Toasts);

    Stack::new()
        .push(base)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(field)
        .into()
}

fn view_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let form = ctx.form;

    let header_input = text_input("", &form.header)
        .on_input(Message::HeaderChanged)
        .padding(spacing::XS);
    let body_input = text_input("", &form.body)
        .on_input(Message::BodyChanged)
        .on_submit(Message::AddToast)
        .padding(spacing::XS);
    let color_input = text_input("#ffffff", &form.color)
        .on_input(Message::ColorChanged)
        .padding(spacing::XS);
    let delay_input = text_input("5000", &form.delay)
        .on_input(Message::DelayChanged)
        .padding(spacing::XS);

    let autohide_checkbox = checkbox(form.autohide)
        .label(i18n.tr("form-autohide-label"))
        .on_toggle(Message::AutohideToggled);

    let add_button = button(text(i18n.tr("form-add-button")).size(typography::BODY))
        .on_press(Message::AddToast)
        .padding(spacing::XS);

    let visible = ctx.shelf.visible().count();
    let status = Text::new(format!("{}: {visible}", i18n.tr("form-visible-count")))
        .size(typography::BODY_SM);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(labeled(i18n.tr("form-header-label"), header_input.into()))
        .push(labeled(i18n.tr("form-body-label"), body_input.into()))
        .push(labeled(i18n.tr("form-color-label"), color_input.into()))
        .push(labeled(i18n.tr("form-delay-label"), delay_input.into()))
        .push(autohide_checkbox)
        .push(add_button)
        .push(status)
        .into()
}
