// SPDX-License-Identifier: MPL-2.0
//! A toast bound to one element.

use super::builder::{CLOSE_CLASS, SHOWN_CLASS};
use super::config::{ToastConfig, ToastOverrides};
use crate::dom::{Document, ElementId, ListenerId};
use crate::session::Session;

/// Event triggered on the toast's element every time it is hidden.
pub const HIDDEN_EVENT: &str = "hidden.toast";

/// Show/hide behavior for one toast element.
///
/// The element and configuration are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    element: ElementId,
    config: ToastConfig,
    close_listener: ListenerId,
}

impl Toast {
    /// Binds a toast to `element` and wires its close control.
    ///
    /// `overrides` are merged onto the default configuration. A delegated
    /// click listener for `.toast__close` is registered on `element` for the
    /// lifetime of the document. The element is not validated.
    pub fn new(document: &mut Document, element: ElementId, overrides: &ToastOverrides) -> Self {
        let config = ToastConfig::default().merged(overrides);
        let close_listener = document.delegate(element, "click", CLOSE_CLASS);
        Self {
            element,
            config,
            close_listener,
        }
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Listener that fires when the close control is clicked.
    #[must_use]
    pub fn close_listener(&self) -> ListenerId {
        self.close_listener
    }

    #[must_use]
    pub fn is_shown(&self, document: &Document) -> bool {
        document.has_class(self.element, SHOWN_CLASS)
    }

    /// Marks the toast shown and, with `autohide`, schedules a hide after
    /// `delay`. Each call schedules its own timer.
    pub fn show(&self, session: &mut Session) {
        session.document.add_class(self.element, SHOWN_CLASS);
        if self.config.autohide {
            let now = session.now();
            session.timers.schedule(now, self.config.delay, self.element);
            log::debug!(
                "toast {:?} shown, hiding in {:?}",
                self.element,
                self.config.delay
            );
        } else {
            log::debug!("toast {:?} shown until closed", self.element);
        }
    }

    /// Removes the shown marker, cancels pending auto-hide timers and
    /// triggers [`HIDDEN_EVENT`]. The event fires on every call.
    ///
    /// Returns the listeners the event reached.
    pub fn hide(&self, session: &mut Session) -> Vec<ListenerId> {
        session.document.remove_class(self.element, SHOWN_CLASS);
        let element = self.element;
        let cancelled = session.timers.cancel_where(|task| *task == element);
        let reached = session.document.trigger(element, HIDDEN_EVENT);
        log::debug!(
            "toast {element:?} hidden, {cancelled} timer(s) cancelled, {} listener(s) reached",
            reached.len()
        );
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::builder::create;
    use std::time::{Duration, Instant};

    fn session_with_toast(overrides: &ToastOverrides) -> (Session, Toast) {
        let mut session = Session::starting_at(Instant::now());
        let element = create(&mut session.document, "H", "B", "#ffffff");
        let body = session.document.body();
        session.document.append_child(body, element);
        let toast = Toast::new(&mut session.document, element, overrides);
        (session, toast)
    }

    fn hidden_count(session: &Session, toast: &Toast) -> usize {
        session
            .document
            .events()
            .iter()
            .filter(|e| e.target == toast.element() && e.name.to_string() == HIDDEN_EVENT)
            .count()
    }

    #[test]
    fn new_merges_config() {
        let (_, toast) = session_with_toast(&ToastOverrides::new().delay(Duration::from_millis(100)));
        assert!(toast.config().autohide);
        assert_eq!(toast.config().delay, Duration::from_millis(100));
    }

    #[test]
    fn show_adds_marker_and_schedules_hide() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        toast.show(&mut session);

        assert!(toast.is_shown(&session.document));
        assert_eq!(session.timers.len(), 1);
    }

    #[test]
    fn show_without_autohide_schedules_nothing() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new().autohide(false));
        toast.show(&mut session);

        assert!(toast.is_shown(&session.document));
        assert!(session.timers.is_empty());
    }

    #[test]
    fn show_twice_schedules_two_timers() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        toast.show(&mut session);
        toast.show(&mut session);
        assert_eq!(session.timers.len(), 2);
    }

    #[test]
    fn show_then_hide_removes_marker_and_fires_once() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        toast.show(&mut session);
        toast.hide(&mut session);

        assert!(!toast.is_shown(&session.document));
        assert_eq!(hidden_count(&session, &toast), 1);
    }

    #[test]
    fn hide_cancels_pending_timers() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        toast.show(&mut session);
        toast.show(&mut session);
        toast.hide(&mut session);
        assert!(session.timers.is_empty());
    }

    #[test]
    fn hide_without_show_still_fires() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        toast.hide(&mut session);
        toast.hide(&mut session);

        assert!(!toast.is_shown(&session.document));
        assert_eq!(hidden_count(&session, &toast), 2);
    }

    #[test]
    fn hidden_listeners_are_reached() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        let body = session.document.body();
        let observer = session.document.on(body, HIDDEN_EVENT);

        let reached = toast.hide(&mut session);
        assert_eq!(reached, vec![observer]);
        assert_eq!(hidden_count(&session, &toast), 1);
    }

    #[test]
    fn hide_reaches_only_matching_namespace() {
        let (mut session, toast) = session_with_toast(&ToastOverrides::new());
        let element = toast.element();
        let other = session.document.on(element, "hidden.other");
        let own = session.document.on(element, HIDDEN_EVENT);

        let reached = toast.hide(&mut session);
        assert_eq!(reached, vec![own]);
        assert!(!reached.contains(&other));
    }

    #[test]
    fn close_click_reaches_listener() {
        let (session, toast) = session_with_toast(&ToastOverrides::new());
        let close = session.document.query_class(CLOSE_CLASS)[0];
        assert_eq!(session.document.click(close), vec![toast.close_listener()]);
    }
}
