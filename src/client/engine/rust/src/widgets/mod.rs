/* src/client/engine/rust/src/widgets/mod.rs */

pub mod escape;
pub mod kicker;
pub mod lang;
pub mod lightbox;
pub mod modal;
pub mod nav;
pub mod tabs;
pub mod typewriter;
pub mod year;

use folio_dom::Document;
use serde::Serialize;

pub use escape::dismiss_first;
pub use kicker::Kicker;
pub use lang::LangSelector;
pub use lightbox::Lightbox;
pub use modal::ZoomModal;
pub use nav::MobileNav;
pub use tabs::CertTabs;
pub use typewriter::Typewriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
  Year,
  Nav,
  Lightbox,
  Modal,
  Tabs,
  Lang,
  Kicker,
  Typewriter,
  Escape,
}

/// A widget the Escape key can close.
pub trait Dismissible {
  fn kind(&self) -> WidgetKind;
  fn is_open(&self, doc: &Document) -> bool;
  /// Idempotent.
  fn close(&self, doc: &mut Document);
}
