// SPDX-License-Identifier: MPL-2.0
//! Event names, listener registrations and the event log entries.

use super::ElementId;
use std::fmt;

/// Identifier returned when a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(super) usize);

/// An event name in `type.namespace` form, e.g. `hidden.toast`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName {
    kind: String,
    namespace: Option<String>,
}

impl EventName {
    /// Splits `name` on its first dot into a type and an optional namespace.
    pub fn parse(name: &str) -> Self {
        match name.split_once('.') {
            Some((kind, namespace)) if !namespace.is_empty() => Self {
                kind: kind.to_string(),
                namespace: Some(namespace.to_string()),
            },
            Some((kind, _)) => Self {
                kind: kind.to_string(),
                namespace: None,
            },
            None => Self {
                kind: name.to_string(),
                namespace: None,
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns whether a listener registered for `self` runs when `fired`
    /// is dispatched.
    ///
    /// A namespaced dispatch only reaches listeners registered with the same
    /// namespace; a bare dispatch reaches every listener of that type.
    #[must_use]
    pub fn accepts(&self, fired: &EventName) -> bool {
        if self.kind != fired.kind {
            return false;
        }
        match &fired.namespace {
            None => true,
            Some(ns) => self.namespace.as_deref() == Some(ns.as_str()),
        }
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}.{}", self.kind, ns),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// A listener attached to `scope`.
///
/// With a `selector` it is delegated: it fires for events whose target sits
/// inside `scope` on an element carrying the selector class.
#[derive(Debug, Clone)]
pub(super) struct Listener {
    pub id: ListenerId,
    pub scope: ElementId,
    pub event: EventName,
    pub selector: Option<String>,
}

/// A custom event recorded by [`Document::trigger`](super::Document::trigger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub target: ElementId,
    pub name: EventName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_namespace() {
        let name = EventName::parse("hidden.toast");
        assert_eq!(name.kind(), "hidden");
        assert_eq!(name.namespace(), Some("toast"));
        assert_eq!(name.to_string(), "hidden.toast");
    }

    #[test]
    fn parse_without_namespace() {
        let name = EventName::parse("click");
        assert_eq!(name.kind(), "click");
        assert!(name.namespace().is_none());
    }

    #[test]
    fn trailing_dot_is_ignored() {
        assert_eq!(EventName::parse("click."), EventName::parse("click"));
    }

    #[test]
    fn namespaced_dispatch_only_reaches_same_namespace() {
        let fired = EventName::parse("hidden.toast");
        assert!(EventName::parse("hidden.toast").accepts(&fired));
        assert!(!EventName::parse("hidden").accepts(&fired));
        assert!(!EventName::parse("hidden.other").accepts(&fired));
    }

    #[test]
    fn bare_dispatch_reaches_all_namespaces() {
        let fired = EventName::parse("hidden");
        assert!(EventName::parse("hidden").accepts(&fired));
        assert!(EventName::parse("hidden.toast").accepts(&fired));
        assert!(!EventName::parse("shown").accepts(&fired));
    }
}
