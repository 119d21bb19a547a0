/* src/client/engine/rust/src/widgets/lightbox.rs */

use folio_dom::{Document, NodeId};
use tracing::debug;

use super::{Dismissible, WidgetKind};
use crate::error::{EngineError, selector};
use crate::events::{Action, EventKind, Listener, Matcher, Route};

const OPEN_CLASS: &str = "open";
const NO_SCROLL_CLASS: &str = "no-scroll";
const DEFAULT_ALT: &str = "Imagen";

/// Certificate image viewer. Opened by any `.js-lightbox` trigger through
/// its `data-src` / `data-alt` pair.
#[derive(Debug, Clone)]
pub struct Lightbox {
  root: NodeId,
  img: NodeId,
  caption: NodeId,
}

impl Lightbox {
  pub fn init(doc: &Document) -> Option<Self> {
    let found = (
      doc.element_by_id("lightbox"),
      doc.element_by_id("lightboxImg"),
      doc.element_by_id("lightboxCaption"),
    );
    let (Some(root), Some(img), Some(caption)) = found else {
      debug!("lightbox: container, image or caption missing");
      return None;
    };
    Some(Self { root, img, caption })
  }

  pub fn root(&self) -> NodeId {
    self.root
  }

  pub fn listeners(&self) -> Result<Vec<Listener>, EngineError> {
    Ok(vec![
      Listener::new(WidgetKind::Lightbox, EventKind::Click)
        .route(Route::new(Matcher::Closest(selector(".js-lightbox")?), Action::LightboxOpen))
        .route(Route::new(Matcher::Matches(selector("[data-close]")?), Action::LightboxClose))
        .route(Route::new(Matcher::Target(self.root), Action::LightboxClose)),
    ])
  }

  /// Show `src`. A blank source is ignored; a missing alt falls back to
  /// the generic label while the caption stays empty.
  pub fn open(&self, doc: &mut Document, src: &str, alt: Option<&str>) -> bool {
    if src.is_empty() {
      return false;
    }
    let alt = alt.filter(|a| !a.is_empty());
    doc.set_attr(self.img, "src", src);
    doc.set_attr(self.img, "alt", alt.unwrap_or(DEFAULT_ALT));
    doc.set_text_content(self.caption, alt.unwrap_or_default());
    doc.add_class(self.root, OPEN_CLASS);
    doc.set_attr(self.root, "aria-hidden", "false");
    if let Some(body) = doc.body() {
      doc.add_class(body, NO_SCROLL_CLASS);
    }
    true
  }

  /// Open from a trigger element's dataset.
  pub fn open_from(&self, doc: &mut Document, trigger: NodeId) -> bool {
    let src = doc.dataset_get(trigger, "src").unwrap_or_default().to_string();
    let alt = doc.dataset_get(trigger, "alt").map(str::to_string);
    self.open(doc, &src, alt.as_deref())
  }
}

impl Dismissible for Lightbox {
  fn kind(&self) -> WidgetKind {
    WidgetKind::Lightbox
  }

  fn is_open(&self, doc: &Document) -> bool {
    doc.has_class(self.root, OPEN_CLASS)
  }

  fn close(&self, doc: &mut Document) {
    doc.remove_class(self.root, OPEN_CLASS);
    doc.set_attr(self.root, "aria-hidden", "true");
    doc.set_attr(self.img, "src", "");
    doc.set_attr(self.img, "alt", "");
    doc.set_text_content(self.caption, "");
    if let Some(body) = doc.body() {
      doc.remove_class(body, NO_SCROLL_CLASS);
    }
  }
}
