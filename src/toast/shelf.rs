// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management for one session.
//!
//! The `ToastShelf` owns the session, the container region and every toast it
//! created. It is the entry point for spawning toasts and for routing user
//! clicks and clock ticks back to the toasts they concern.

use super::builder::{create, CONTAINER_CLASS};
use super::config::{ToastOverrides, ToastParams, ToastParamsOverrides};
use super::instance::Toast;
use crate::config::defaults::{CONTAINER_RIGHT_PX, CONTAINER_TOP_PX, CONTAINER_WIDTH_PX};
use crate::dom::{DomEvent, Document, ElementId, ListenerId};
use crate::session::Session;
use std::time::Instant;

/// Inline style of the container region.
#[must_use]
pub fn container_style() -> String {
    format!(
        "position: fixed; top: {CONTAINER_TOP_PX}px; right: {CONTAINER_RIGHT_PX}px; width: {CONTAINER_WIDTH_PX}px;"
    )
}

/// A toast hidden by a click or a timer, with the `hidden.toast`
/// listeners its event reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    pub element: ElementId,
    pub reached: Vec<ListenerId>,
}

/// Lazily created container region. At most one exists per document.
#[derive(Debug, Clone, Default)]
pub struct ContainerSlot {
    element: Option<ElementId>,
}

impl ContainerSlot {
    #[must_use]
    pub fn get(&self) -> Option<ElementId> {
        self.element
    }

    /// Returns the container, adopting an existing `.toasts` element or
    /// creating one under `body` the first time.
    pub fn ensure(&mut self, document: &mut Document) -> ElementId {
        if let Some(element) = self.element {
            return element;
        }
        let element = match document.first_with_class(CONTAINER_CLASS) {
            Some(existing) => existing,
            None => {
                let created = document.create_element("div");
                document.add_class(created, CONTAINER_CLASS);
                document.set_attribute(created, "style", container_style());
                let body = document.body();
                document.append_child(body, created);
                log::debug!("created toast container {created:?}");
                created
            }
        };
        self.element = Some(element);
        element
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastShelf {
    session: Session,
    container: ContainerSlot,
    defaults: ToastParams,
    toasts: Vec<Toast>,
}

impl ToastShelf {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shelf over an existing session.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    /// Replaces the parameters `add` falls back to.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ToastParams) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastParams {
        &self.defaults
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.session.document
    }

    /// The container, if one has been ensured.
    #[must_use]
    pub fn container(&self) -> Option<ElementId> {
        self.container.get()
    }

    /// Idempotently creates the container region.
    pub fn ensure_container(&mut self) -> ElementId {
        self.container.ensure(&mut self.session.document)
    }

    /// Spawns a toast: builds it, appends it to the container, binds a
    /// [`Toast`] to the new element and shows it.
    pub fn add(&mut self, overrides: &ToastParamsOverrides) -> Toast {
        let params = self.defaults.merged(overrides);
        let container = self.ensure_container();

        let element = create(
            &mut self.session.document,
            &params.header,
            &params.body,
            &params.color,
        );
        self.session.document.append_child(container, element);

        let toast = self.bind(element, &params.instance_overrides());
        toast.show(&mut self.session);
        toast
    }

    /// Binds a toast to an existing element and routes its clicks and
    /// timers through this shelf. The toast is not shown.
    pub fn bind(&mut self, element: ElementId, overrides: &ToastOverrides) -> Toast {
        let toast = Toast::new(&mut self.session.document, element, overrides);
        self.toasts.push(toast.clone());
        toast
    }

    /// Toasts managed by this shelf, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Toasts currently carrying the shown marker.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts
            .iter()
            .filter(|t| t.is_shown(&self.session.document))
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.session.timers.is_empty()
    }

    pub fn show(&mut self, toast: &Toast) {
        toast.show(&mut self.session);
    }

    pub fn hide(&mut self, toast: &Toast) -> Vec<ListenerId> {
        toast.hide(&mut self.session)
    }

    /// Moves the session clock forward without firing timers.
    pub fn advance(&mut self, now: Instant) {
        self.session.advance(now);
    }

    /// Dispatches a click at `target` and hides every toast whose close
    /// control was hit.
    pub fn click(&mut self, target: ElementId) -> Vec<Dismissal> {
        let reached = self.session.document.click(target);
        let mut dismissed = Vec::new();
        for toast in self
            .toasts
            .iter()
            .filter(|t| reached.contains(&t.close_listener()))
        {
            dismissed.push(Dismissal {
                element: toast.element(),
                reached: toast.hide(&mut self.session),
            });
        }
        dismissed
    }

    /// Advances the clock to `now` and hides toasts whose timers are due.
    pub fn tick(&mut self, now: Instant) -> Vec<Dismissal> {
        self.session.advance(now);
        let mut dismissed = Vec::new();
        for element in self.session.timers.pop_due(now) {
            if let Some(toast) = self.toasts.iter().find(|t| t.element() == element) {
                dismissed.push(Dismissal {
                    element,
                    reached: toast.hide(&mut self.session),
                });
            }
        }
        dismissed
    }

    /// Takes the custom events logged since the last call.
    pub fn drain_events(&mut self) -> Vec<DomEvent> {
        self.session.document.drain_events()
    }
}
