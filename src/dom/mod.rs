// SPDX-License-Identifier: MPL-2.0
//! Retained element tree the toast widget builds on.
//!
//! The document owns every element in an arena and hands out [`ElementId`]s.
//! It supports the small set of operations a widget layer needs:
//!
//! - element creation, re-parenting and text/attribute/class mutation
//! - class queries over attached elements in document order
//! - direct and delegated listeners with bubbling dispatch
//! - namespaced custom events recorded in an observable log
//!
//! Operations on an unknown id are no-ops and queries on it return empty
//! results, so callers never have to validate ids up front.

mod event;

pub use event::{DomEvent, EventName, ListenerId};

use event::Listener;
use std::collections::BTreeMap;

/// Handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An element tree rooted at a `body` element.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: ElementId,
    listeners: Vec<Listener>,
    events: Vec<DomEvent>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document containing only its `body`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            body: ElementId(0),
            listeners: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag));
        id
    }

    fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.tag.as_str())
    }

    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |e| e.children.as_slice())
    }

    /// Returns whether `id` is `body` or a descendant of it.
    #[must_use]
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.ancestors_or_self(id).last().copied() == Some(self.body)
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    ///
    /// Ignored when either id is unknown or when `child` is `parent` itself
    /// or one of its ancestors.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.ancestors_or_self(parent).contains(&child) {
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            if let Some(old) = self.get_mut(old_parent) {
                old.children.retain(|c| *c != child);
            }
        }
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.retain(|c| c != class);
        }
    }

    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    #[must_use]
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.get(id).map_or(&[], |e| e.classes.as_slice())
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(id) {
            element.attributes.insert(name.to_string(), value.into());
        }
    }

    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Sets the element's own text. Text is stored verbatim, never parsed
    /// as markup.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.get_mut(id) {
            element.text = text.into();
        }
    }

    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(|e| e.text.as_str())
    }

    /// Returns attached elements carrying `class`, in document order.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev());
        }
        found
    }

    /// Returns the first attached element carrying `class`.
    #[must_use]
    pub fn first_with_class(&self, class: &str) -> Option<ElementId> {
        self.query_class(class).into_iter().next()
    }

    fn ancestors_or_self(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = self.contains(id).then_some(id);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path
    }

    fn next_listener_id(&self) -> ListenerId {
        ListenerId(self.listeners.len())
    }

    /// Registers a listener for `event` on `scope` itself and anything
    /// bubbling up to it.
    pub fn on(&mut self, scope: ElementId, event: impl Into<EventName>) -> ListenerId {
        let id = self.next_listener_id();
        self.listeners.push(Listener {
            id,
            scope,
            event: event.into(),
            selector: None,
        });
        id
    }

    /// Registers a delegated listener on `scope` for events whose target is
    /// inside `scope` on (or under) an element carrying `selector_class`.
    pub fn delegate(
        &mut self,
        scope: ElementId,
        event: impl Into<EventName>,
        selector_class: &str,
    ) -> ListenerId {
        let id = self.next_listener_id();
        self.listeners.push(Listener {
            id,
            scope,
            event: event.into(),
            selector: Some(selector_class.to_string()),
        });
        id
    }

    /// Dispatches `event` at `target` and returns the listeners it reached,
    /// in bubbling order.
    ///
    /// At each element on the path from `target` to the root, delegated
    /// listeners scoped there run once for every matching element between
    /// the target and the scope, then direct listeners scoped there run.
    pub fn dispatch(&self, target: ElementId, event: impl Into<EventName>) -> Vec<ListenerId> {
        let fired = event.into();
        let path = self.ancestors_or_self(target);
        let mut reached = Vec::new();

        for (depth, node) in path.iter().enumerate() {
            let scoped = self
                .listeners
                .iter()
                .filter(|l| l.scope == *node && l.event.accepts(&fired));

            let (delegated, direct): (Vec<&Listener>, Vec<&Listener>) =
                scoped.partition(|l| l.selector.is_some());

            for inner in &path[..depth] {
                for listener in &delegated {
                    if let Some(selector) = &listener.selector {
                        if self.has_class(*inner, selector) {
                            reached.push(listener.id);
                        }
                    }
                }
            }
            reached.extend(direct.iter().map(|l| l.id));
        }
        reached
    }

    /// Dispatches a `click` at `target`.
    pub fn click(&self, target: ElementId) -> Vec<ListenerId> {
        self.dispatch(target, "click")
    }

    /// Dispatches a custom event at `target` and records it in the log.
    pub fn trigger(&mut self, target: ElementId, event: impl Into<EventName>) -> Vec<ListenerId> {
        let name = event.into();
        let reached = self.dispatch(target, name.clone());
        self.events.push(DomEvent { target, name });
        reached
    }

    /// Custom events triggered so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.events)
    }
}
