/* src/client/engine/rust/src/widgets/lang.rs */

use folio_dom::{Document, NodeId, Selector};

use super::WidgetKind;
use crate::config::CvSection;
use crate::error::{EngineError, selector};
use crate::events::{Action, EventKind, Listener, Matcher, Route};
use crate::i18n::Locale;

const OPEN_CLASS: &str = "is-open";

/// Desktop dropdown plus the flat mobile list of `.lang-item[data-lang]`
/// options, and the locale-dependent page chrome.
#[derive(Debug, Clone)]
pub struct LangSelector {
  wrapper_sel: Selector,
  button_sel: Selector,
  item_sel: Selector,
}

impl LangSelector {
  pub fn init() -> Result<Self, EngineError> {
    Ok(Self {
      wrapper_sel: selector(".lang")?,
      button_sel: selector(".lang-btn")?,
      item_sel: selector(".lang-item[data-lang]")?,
    })
  }

  pub fn listeners(&self) -> Vec<Listener> {
    vec![
      Listener::new(WidgetKind::Lang, EventKind::Click)
        .route(Route::new(Matcher::Closest(self.button_sel.clone()), Action::LangToggle).stop())
        .route(Route::new(Matcher::Closest(self.item_sel.clone()), Action::LangSelect))
        .route(Route::new(Matcher::Any, Action::LangDismiss)),
    ]
  }

  /// Toggle the dropdown that owns `button`.
  pub fn toggle(&self, doc: &mut Document, button: NodeId) -> Option<bool> {
    let wrapper = doc.closest(button, &self.wrapper_sel)?;
    Some(doc.toggle_class(wrapper, OPEN_CLASS))
  }

  pub fn close_all(&self, doc: &mut Document) {
    for wrapper in doc.query_selector_all(&self.wrapper_sel) {
      doc.remove_class(wrapper, OPEN_CLASS);
    }
  }

  pub fn is_open(&self, doc: &Document) -> bool {
    doc.query_selector_all(&self.wrapper_sel).into_iter().any(|w| doc.has_class(w, OPEN_CLASS))
  }

  /// The raw `data-lang` code of an option.
  pub fn requested_code(doc: &Document, item: NodeId) -> Option<&str> {
    doc.dataset_get(item, "lang")
  }

  pub fn set_html_lang(doc: &mut Document, locale: Locale) {
    if let Some(html) = doc.document_element() {
      doc.set_attr(html, "lang", locale.html_lang());
    }
  }

  /// Button labels and the CV download link.
  pub fn apply_chrome(&self, doc: &mut Document, locale: Locale, cv: &CvSection) {
    for button in doc.query_selector_all(&self.button_sel) {
      doc.set_text_content(button, locale.label());
    }
    if let Some(link) = doc.element_by_id("cvDownload") {
      let href = cv.href_for(locale);
      let file = href.rsplit('/').next().unwrap_or(href);
      doc.set_attr(link, "href", href);
      doc.set_attr(link, "download", file);
    }
  }
}
