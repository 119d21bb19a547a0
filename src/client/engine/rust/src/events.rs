/* src/client/engine/rust/src/events.rs */

use folio_dom::{Document, NodeId, Selector};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::widgets::WidgetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
  Click,
  TouchStart,
  KeyDown,
}

/// A user event as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
  pub kind: EventKind,
  pub target: Option<NodeId>,
  /// `KeyboardEvent.key` for key events.
  pub key: Option<String>,
}

impl DomEvent {
  pub fn click(target: NodeId) -> Self {
    Self { kind: EventKind::Click, target: Some(target), key: None }
  }

  pub fn touch(target: NodeId) -> Self {
    Self { kind: EventKind::TouchStart, target: Some(target), key: None }
  }

  pub fn key_down(key: impl Into<String>) -> Self {
    Self { kind: EventKind::KeyDown, target: None, key: Some(key.into()) }
  }
}

/// Predicate a route tests against an event.
#[derive(Debug, Clone)]
pub enum Matcher {
  /// Target or one of its ancestors matches; that element is the hit node.
  Closest(Selector),
  /// Target itself matches.
  Matches(Selector),
  /// Target is exactly this node.
  Target(NodeId),
  /// Target sits inside one of these nodes (listeners bound at init).
  Within(Vec<NodeId>),
  /// Target is outside this node.
  Outside(NodeId),
  Key(String),
  Any,
}

impl Matcher {
  /// `None` when the event does not match; otherwise the node the hit
  /// refers to, if any.
  fn resolve(&self, doc: &Document, event: &DomEvent) -> Option<Option<NodeId>> {
    match self {
      Self::Closest(sel) => event.target.and_then(|t| doc.closest(t, sel)).map(Some),
      Self::Matches(sel) => event.target.filter(|&t| doc.matches(t, sel)).map(Some),
      Self::Target(node) => event.target.filter(|t| t == node).map(Some),
      Self::Within(nodes) => {
        let target = event.target?;
        nodes.iter().copied().find(|&n| doc.contains(n, target)).map(Some)
      }
      Self::Outside(node) => event.target.filter(|&t| !doc.contains(*node, t)).map(Some),
      Self::Key(name) => (event.key.as_deref() == Some(name.as_str())).then_some(None),
      Self::Any => Some(event.target),
    }
  }
}

/// What the page does for a matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
  NavToggle,
  NavClose,
  LightboxOpen,
  LightboxClose,
  ModalOpen,
  ModalClose,
  TabSelect,
  GalleryToggle,
  LangToggle,
  LangSelect,
  LangDismiss,
  Escape,
}

#[derive(Debug, Clone)]
pub struct Route {
  pub matcher: Matcher,
  pub action: Action,
  /// Stop later listeners from seeing the event.
  pub stop: bool,
}

impl Route {
  pub fn new(matcher: Matcher, action: Action) -> Self {
    Self { matcher, action, stop: false }
  }

  #[must_use]
  pub fn stop(mut self) -> Self {
    self.stop = true;
    self
  }
}

/// One widget's handler for one event kind. Routes are tried in order and
/// the first match wins.
#[derive(Debug, Clone)]
pub struct Listener {
  pub widget: WidgetKind,
  pub kind: EventKind,
  pub routes: Vec<Route>,
}

impl Listener {
  pub fn new(widget: WidgetKind, kind: EventKind) -> Self {
    Self { widget, kind, routes: Vec::new() }
  }

  #[must_use]
  pub fn route(mut self, route: Route) -> Self {
    self.routes.push(route);
    self
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
  pub widget: WidgetKind,
  pub action: Action,
  pub node: Option<NodeId>,
}

/// Routing table shared by every widget, in registration order.
#[derive(Debug, Default)]
pub struct EventRouter {
  listeners: Vec<Listener>,
}

impl EventRouter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&mut self, listener: Listener) {
    self.listeners.push(listener);
  }

  pub fn listeners(&self) -> &[Listener] {
    &self.listeners
  }

  /// Match `event` against every listener of its kind. Computes hits only;
  /// the caller performs them.
  pub fn dispatch(&self, doc: &Document, event: &DomEvent) -> Vec<Hit> {
    let mut hits = Vec::new();
    for listener in self.listeners.iter().filter(|l| l.kind == event.kind) {
      let matched = listener
        .routes
        .iter()
        .find_map(|route| route.matcher.resolve(doc, event).map(|node| (route, node)));
      if let Some((route, node)) = matched {
        hits.push(Hit { widget: listener.widget, action: route.action, node });
        if route.stop {
          break;
        }
      }
    }
    trace!(kind = ?event.kind, hits = hits.len(), "event dispatched");
    hits
  }
}
