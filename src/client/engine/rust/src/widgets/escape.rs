/* src/client/engine/rust/src/widgets/escape.rs */

use folio_dom::Document;
use tracing::debug;

use super::{Dismissible, WidgetKind};
use crate::events::{Action, EventKind, Listener, Matcher, Route};

pub fn listener() -> Listener {
  Listener::new(WidgetKind::Escape, EventKind::KeyDown)
    .route(Route::new(Matcher::Key("Escape".into()), Action::Escape))
}

/// Close the first open widget in `precedence` order and stop there.
pub fn dismiss_first(doc: &mut Document, precedence: &[&dyn Dismissible]) -> Option<WidgetKind> {
  let widget = precedence.iter().find(|w| w.is_open(doc))?;
  widget.close(doc);
  debug!(widget = ?widget.kind(), "escape dismissed");
  Some(widget.kind())
}
