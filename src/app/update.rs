// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{FormState, Message};
use crate::config::defaults::{MAX_DELAY_MS, MIN_DELAY_MS};
use crate::toast::{Dismissal, ToastParamsOverrides, ToastShelf};
use crate::ui::toasts;
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable state touched by `update`.
pub struct UpdateContext<'a> {
    pub form: &'a mut FormState,
    pub shelf: &'a mut ToastShelf,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    if let Message::Tick(now) = message {
        let dismissed = ctx.shelf.tick(now);
        log_dismissed("timer", &dismissed);
        drain_event_log(ctx.shelf);
        return Task::none();
    }
    // Timers scheduled below must start from the wall clock, not the last tick.
    ctx.shelf.advance(Instant::now());

    match message {
        Message::HeaderChanged(value) => ctx.form.header = value,
        Message::BodyChanged(value) => ctx.form.body = value,
        Message::ColorChanged(value) => ctx.form.color = value,
        Message::DelayChanged(value) => ctx.form.delay = value,
        Message::AutohideToggled(value) => ctx.form.autohide = value,
        Message::AddToast => {
            let overrides = form_overrides(ctx.form);
            let toast = ctx.shelf.add(&overrides);
            log::debug!("spawned toast {:?} from form", toast.element());
        }
        Message::Toasts(toasts::Message::Click(target)) => {
            let dismissed = ctx.shelf.click(target);
            log_dismissed("close", &dismissed);
            drain_event_log(ctx.shelf);
        }
        Message::Tick(_) => {}
    }
    Task::none()
}

fn log_dismissed(cause: &str, dismissed: &[Dismissal]) {
    for d in dismissed {
        log::debug!(
            "toast {:?} dismissed by {cause}, {} observer(s)",
            d.element,
            d.reached.len()
        );
    }
}

/// The app has no `hidden.toast` consumers besides the log, so the document
/// event log is emptied after every hide.
fn drain_event_log(shelf: &mut ToastShelf) {
    for event in shelf.drain_events() {
        log::trace!("{} on {:?}", event.name, event.target);
    }
}

/// Converts the form into factory parameters.
///
/// An unparseable delay falls back to the shelf default; a parsed one is
/// clamped to the supported range.
#[must_use]
pub fn form_overrides(form: &FormState) -> ToastParamsOverrides {
    let mut overrides = ToastParamsOverrides::new()
        .header(form.header.clone())
        .body(form.body.clone())
        .color(form.color.trim())
        .autohide(form.autohide);
    if let Ok(ms) = form.delay.trim().parse::<u64>() {
        overrides = overrides.delay(Duration::from_millis(ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)));
    }
    overrides
}
