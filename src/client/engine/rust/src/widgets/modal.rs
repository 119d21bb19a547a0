/* src/client/engine/rust/src/widgets/modal.rs */

use folio_dom::{Document, NodeId};
use tracing::debug;

use super::{Dismissible, WidgetKind};
use crate::error::{EngineError, selector};
use crate::events::{Action, EventKind, Listener, Matcher, Route};

const OPEN_CLASS: &str = "is-open";
const DEFAULT_ALT: &str = "Logo";
const TRIGGERS: &str = ".xp-logo img, .zoomable";

/// Logo zoom modal. Its triggers are the matching elements present at init;
/// elements added later are not wired.
#[derive(Debug, Clone)]
pub struct ZoomModal {
  root: NodeId,
  img: NodeId,
  close_button: NodeId,
  triggers: Vec<NodeId>,
}

impl ZoomModal {
  pub fn init(doc: &Document) -> Result<Option<Self>, EngineError> {
    let root = doc.element_by_id("img-modal");
    let img = doc.element_by_id("img-modal-src");
    let close_button = match root {
      Some(root) => doc.query_selector_within(root, &selector(".img-close")?),
      None => None,
    };
    let (Some(root), Some(img), Some(close_button)) = (root, img, close_button) else {
      debug!("zoom modal: container, image or close button missing");
      return Ok(None);
    };
    let triggers = doc.query_selector_all(&selector(TRIGGERS)?);
    debug!(triggers = triggers.len(), "zoom modal bound");
    Ok(Some(Self { root, img, close_button, triggers }))
  }

  pub fn root(&self) -> NodeId {
    self.root
  }

  pub fn triggers(&self) -> &[NodeId] {
    &self.triggers
  }

  pub fn listeners(&self) -> Vec<Listener> {
    vec![
      Listener::new(WidgetKind::Modal, EventKind::Click)
        .route(Route::new(Matcher::Within(self.triggers.clone()), Action::ModalOpen))
        .route(Route::new(Matcher::Within(vec![self.close_button]), Action::ModalClose))
        .route(Route::new(Matcher::Target(self.root), Action::ModalClose)),
    ]
  }

  pub fn open(&self, doc: &mut Document, src: &str, alt: Option<&str>) -> bool {
    if src.is_empty() {
      return false;
    }
    doc.add_class(self.root, OPEN_CLASS);
    doc.set_attr(self.root, "aria-hidden", "false");
    doc.set_attr(self.img, "src", src);
    doc.set_attr(self.img, "alt", alt.filter(|a| !a.is_empty()).unwrap_or(DEFAULT_ALT));
    if let Some(body) = doc.body() {
      doc.set_style_property(body, "overflow", Some("hidden"));
    }
    true
  }

  /// Open from a trigger's own `src` and `alt` attributes.
  pub fn open_from(&self, doc: &mut Document, trigger: NodeId) -> bool {
    let src = doc.attr(trigger, "src").unwrap_or_default().to_string();
    let alt = doc.attr(trigger, "alt").map(str::to_string);
    self.open(doc, &src, alt.as_deref())
  }
}

impl Dismissible for ZoomModal {
  fn kind(&self) -> WidgetKind {
    WidgetKind::Modal
  }

  fn is_open(&self, doc: &Document) -> bool {
    doc.has_class(self.root, OPEN_CLASS)
  }

  fn close(&self, doc: &mut Document) {
    doc.remove_class(self.root, OPEN_CLASS);
    doc.set_attr(self.root, "aria-hidden", "true");
    doc.set_attr(self.img, "src", "");
    doc.set_attr(self.img, "alt", "");
    if let Some(body) = doc.body() {
      doc.set_style_property(body, "overflow", None);
    }
  }
}
