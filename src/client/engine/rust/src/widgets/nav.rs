/* src/client/engine/rust/src/widgets/nav.rs */

use folio_dom::{Document, NodeId};
use tracing::debug;

use super::{Dismissible, WidgetKind};
use crate::error::{EngineError, selector};
use crate::events::{Action, EventKind, Listener, Matcher, Route};

/// `#navMobile`, a `<details>` panel; its `open` attribute is the state.
#[derive(Debug, Clone)]
pub struct MobileNav {
  root: NodeId,
}

impl MobileNav {
  pub fn init(doc: &Document) -> Option<Self> {
    let Some(root) = doc.element_by_id("navMobile") else {
      debug!("mobile nav: no #navMobile element");
      return None;
    };
    Some(Self { root })
  }

  pub fn root(&self) -> NodeId {
    self.root
  }

  pub fn listeners(&self) -> Result<Vec<Listener>, EngineError> {
    let click = Listener::new(WidgetKind::Nav, EventKind::Click)
      .route(Route::new(Matcher::Closest(selector("#navMobile summary")?), Action::NavToggle))
      .route(Route::new(Matcher::Closest(selector("#navMobile a")?), Action::NavClose))
      .route(Route::new(Matcher::Outside(self.root), Action::NavClose));
    let touch = Listener::new(WidgetKind::Nav, EventKind::TouchStart)
      .route(Route::new(Matcher::Outside(self.root), Action::NavClose));
    Ok(vec![click, touch])
  }

  /// The native disclosure toggle.
  pub fn toggle(&self, doc: &mut Document) {
    let open = self.is_open(doc);
    doc.set_flag(self.root, "open", !open);
  }
}

impl Dismissible for MobileNav {
  fn kind(&self) -> WidgetKind {
    WidgetKind::Nav
  }

  fn is_open(&self, doc: &Document) -> bool {
    doc.has_attr(self.root, "open")
  }

  fn close(&self, doc: &mut Document) {
    doc.set_flag(self.root, "open", false);
  }
}
