// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, the toast shelf and the
//! composing form, and translates messages into toast operations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::form_overrides;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::toast::{ToastParams, ToastParamsOverrides, ToastShelf};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Color of toasts reporting a startup problem.
const WARNING_TOAST_COLOR: &str = "#e53935";

/// Values of the composing form, kept as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub header: String,
    pub body: String,
    pub color: String,
    pub delay: String,
    pub autohide: bool,
}

impl FormState {
    /// Prefills the form from the shelf defaults.
    #[must_use]
    pub fn from_params(params: &ToastParams) -> Self {
        Self {
            header: params.header.clone(),
            body: params.body.clone(),
            color: params.color.clone(),
            delay: params.delay.as_millis().to_string(),
            autohide: params.autohide,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_params(&ToastParams::default())
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: FormState,
    shelf: ToastShelf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("toasts", &self.shelf.toasts().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            form: FormState::default(),
            shelf: ToastShelf::new(),
        }
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot closure; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags`, the config file and the
    /// active locale.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut defaults = config.toasts.apply_to(ToastParams {
            header: i18n.tr("toast-default-header"),
            body: i18n.tr("toast-default-body"),
            ..ToastParams::default()
        });
        if let Some(color) = &flags.color {
            defaults.color = color.clone();
        }

        let mut app = App {
            form: FormState::from_params(&defaults),
            shelf: ToastShelf::new().with_defaults(defaults),
            i18n,
        };

        if let Some(key) = config_warning {
            app.shelf.add(
                &ToastParamsOverrides::new()
                    .header(app.i18n.tr(&key))
                    .body(app.i18n.tr(&format!("{key}-body")))
                    .color(WARNING_TOAST_COLOR),
            );
        }
        if let Some(overrides) = flags.startup_toast() {
            app.shelf.add(&overrides);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.shelf.has_pending_timers())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            shelf: &mut self.shelf,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            shelf: &self.shelf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::builder::{part, CLOSE_CLASS, HEADER_CLASS};
    use crate::ui::toasts;
    use std::time::{Duration, Instant};

    #[test]
    fn add_toast_uses_form_values() {
        let mut app = App::default();
        let _ = app.update(Message::HeaderChanged("Saved".into()));
        let _ = app.update(Message::ColorChanged("#112233".into()));
        let _ = app.update(Message::AddToast);

        let toast = &app.shelf.toasts()[0];
        let doc = app.shelf.document();
        let header = part(doc, toast.element(), HEADER_CLASS).expect("header");
        assert_eq!(doc.text(header), Some("Saved"));
        assert_eq!(
            doc.attribute(toast.element(), "style"),
            Some("background-color: rgba(17,34,51,0.5)")
        );
        assert!(toast.is_shown(doc));
    }

    #[test]
    fn close_click_hides_toast() {
        let mut app = App::default();
        let _ = app.update(Message::AutohideToggled(false));
        let _ = app.update(Message::AddToast);

        let element = app.shelf.toasts()[0].element();
        let close = part(app.shelf.document(), element, HEADER_CLASS)
            .and_then(|h| part(app.shelf.document(), h, CLOSE_CLASS))
            .expect("close control");
        let _ = app.update(Message::Toasts(toasts::Message::Click(close)));

        assert_eq!(app.shelf.visible().count(), 0);
        assert!(app.shelf.document().events().is_empty());
    }

    #[test]
    fn tick_hides_expired_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::DelayChanged("100".into()));
        let _ = app.update(Message::AddToast);
        assert!(app.shelf.has_pending_timers());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.shelf.visible().count(), 0);
        assert!(!app.shelf.has_pending_timers());
        assert!(app.shelf.document().events().is_empty());
    }

    #[test]
    fn form_prefills_from_defaults() {
        let form = FormState::default();
        assert_eq!(form.delay, "5000");
        assert_eq!(form.color, "#ffffff");
        assert!(form.autohide);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App {
            i18n: I18n::new(Some("en-US".into()), &config::Config::default()),
            ..App::default()
        };
        assert_eq!(app.title(), "Toast Shelf");
    }
}
