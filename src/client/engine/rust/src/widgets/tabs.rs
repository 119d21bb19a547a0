/* src/client/engine/rust/src/widgets/tabs.rs */

use folio_dom::{Document, NodeId, Selector};
use tracing::debug;

use super::WidgetKind;
use crate::error::{EngineError, selector};
use crate::events::{Action, EventKind, Listener, Matcher, Route};
use crate::i18n::Dictionary;

const ACTIVE_CLASS: &str = "is-active";
const COLLAPSED_CLASS: &str = "is-collapsed";
const GEOLOGY_PANEL_ID: &str = "certs-geo";
const FALLBACK_LESS: &str = "Ver menos";

/// Expand-label key for a panel: the geology panel shows its own count.
pub fn more_key(doc: &Document, panel: Option<NodeId>) -> &'static str {
  match panel {
    Some(p) if doc.attr(p, "id") == Some(GEOLOGY_PANEL_ID) => "cert_more_11",
    _ => "cert_more_27",
  }
}

/// Certificate category tabs, each with a collapsible gallery.
#[derive(Debug, Clone)]
pub struct CertTabs {
  tabs: Vec<NodeId>,
  panels: Vec<NodeId>,
  more_buttons: Vec<NodeId>,
  panel_sel: Selector,
  gallery_sel: Selector,
  more_sel: Selector,
}

impl CertTabs {
  /// Collapse every gallery and label every toggle. `None` when the page
  /// has no tabs or no panels.
  pub fn init(doc: &mut Document, dict: &Dictionary) -> Result<Option<Self>, EngineError> {
    let tabs = doc.query_selector_all(&selector(".cert-tab")?);
    let panel_sel = selector(".cert-panel")?;
    let panels = doc.query_selector_all(&panel_sel);
    if tabs.is_empty() || panels.is_empty() {
      debug!(tabs = tabs.len(), panels = panels.len(), "cert tabs: nothing to wire");
      return Ok(None);
    }
    let gallery_sel = selector(".cert-gallery")?;
    let more_sel = selector(".cert-more")?;
    for gallery in doc.query_selector_all(&gallery_sel) {
      doc.add_class(gallery, COLLAPSED_CLASS);
    }
    let more_buttons = doc.query_selector_all(&more_sel);
    let widget = Self { tabs, panels, more_buttons, panel_sel, gallery_sel, more_sel };
    widget.refresh_labels(doc, dict);
    Ok(Some(widget))
  }

  pub fn tabs(&self) -> &[NodeId] {
    &self.tabs
  }

  pub fn panels(&self) -> &[NodeId] {
    &self.panels
  }

  pub fn listeners(&self) -> Vec<Listener> {
    vec![
      Listener::new(WidgetKind::Tabs, EventKind::Click)
        .route(Route::new(Matcher::Within(self.tabs.clone()), Action::TabSelect))
        .route(Route::new(Matcher::Within(self.more_buttons.clone()), Action::GalleryToggle)),
    ]
  }

  /// Activate `tab` and its `data-target` panel. The newly shown gallery is
  /// collapsed again. A missing or unknown target still deactivates the rest.
  pub fn select(&self, doc: &mut Document, tab: NodeId, dict: &Dictionary) {
    for &t in &self.tabs {
      doc.remove_class(t, ACTIVE_CLASS);
      doc.set_attr(t, "aria-selected", "false");
    }
    for &p in &self.panels {
      doc.remove_class(p, ACTIVE_CLASS);
      doc.set_flag(p, "hidden", true);
    }
    doc.add_class(tab, ACTIVE_CLASS);
    doc.set_attr(tab, "aria-selected", "true");

    let target = doc.dataset_get(tab, "target").and_then(|raw| match Selector::parse(raw) {
      Ok(sel) => doc.query_selector(&sel),
      Err(err) => {
        debug!(target = raw, %err, "cert tabs: unusable data-target");
        None
      }
    });
    let Some(panel) = target else {
      return;
    };
    doc.set_flag(panel, "hidden", false);
    doc.add_class(panel, ACTIVE_CLASS);
    if let Some(gallery) = doc.query_selector_within(panel, &self.gallery_sel) {
      doc.add_class(gallery, COLLAPSED_CLASS);
    }
    if let Some(button) = doc.query_selector_within(panel, &self.more_sel) {
      self.set_label(doc, button, true, dict);
    }
  }

  /// Flip the gallery of the button's panel. Returns the new collapsed
  /// state, or `None` when the button has no panel or gallery.
  pub fn toggle_gallery(&self, doc: &mut Document, button: NodeId, dict: &Dictionary) -> Option<bool> {
    let panel = doc.closest(button, &self.panel_sel)?;
    let gallery = doc.query_selector_within(panel, &self.gallery_sel)?;
    let collapsed = doc.toggle_class(gallery, COLLAPSED_CLASS);
    self.set_label(doc, button, collapsed, dict);
    Some(collapsed)
  }

  /// Re-derive every toggle label from `dict` and its gallery's state.
  pub fn refresh_labels(&self, doc: &mut Document, dict: &Dictionary) {
    for panel in doc.query_selector_all(&self.panel_sel) {
      let Some(button) = doc.query_selector_within(panel, &self.more_sel) else {
        continue;
      };
      let collapsed = doc
        .query_selector_within(panel, &self.gallery_sel)
        .is_none_or(|g| doc.has_class(g, COLLAPSED_CLASS));
      self.set_label(doc, button, collapsed, dict);
    }
  }

  fn set_label(&self, doc: &mut Document, button: NodeId, collapsed: bool, dict: &Dictionary) {
    let label = if collapsed {
      let panel = doc.closest(button, &self.panel_sel);
      match dict.get(more_key(doc, panel)) {
        Some(text) => text.to_string(),
        None => doc.text_content(button).trim().to_string(),
      }
    } else {
      dict.get("cert_less").unwrap_or(FALLBACK_LESS).to_string()
    };
    doc.set_text_content(button, &label);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HTML: &str = r##"<body>
<div role="tablist">
  <button class="cert-tab is-active" id="tab-it" data-target="#certs-it" aria-selected="true">IT</button>
  <button class="cert-tab" id="tab-geo" data-target="#certs-geo" aria-selected="false">Geo</button>
  <button class="cert-tab" id="tab-bad" data-target="#nowhere">?</button>
</div>
<section class="cert-panel is-active" id="certs-it">
  <div class="cert-gallery" id="gal-it"><img></div>
  <button class="cert-more" id="more-it"> Ver más </button>
</section>
<section class="cert-panel" id="certs-geo" hidden>
  <div class="cert-gallery" id="gal-geo"></div>
  <button class="cert-more" id="more-geo">Ver más</button>
</section></body>"##;

  fn es() -> Dictionary {
    [("cert_more_27", "Ver 27 más"), ("cert_more_11", "Ver 11 más"), ("cert_less", "Ver menos")]
      .into_iter()
      .collect()
  }

  fn en() -> Dictionary {
    [("cert_more_27", "View 27 more"), ("cert_more_11", "View 11 more"), ("cert_less", "Show less")]
      .into_iter()
      .collect()
  }

  fn setup(dict: &Dictionary) -> (Document, CertTabs) {
    let mut doc = Document::parse(HTML);
    let tabs = CertTabs::init(&mut doc, dict).unwrap().unwrap();
    (doc, tabs)
  }

  fn id(doc: &Document, id: &str) -> NodeId {
    doc.element_by_id(id).unwrap()
  }

  #[test]
  fn init_collapses_and_labels() {
    let (doc, _) = setup(&es());
    assert!(doc.has_class(id(&doc, "gal-it"), "is-collapsed"));
    assert!(doc.has_class(id(&doc, "gal-geo"), "is-collapsed"));
    assert_eq!(doc.text_content(id(&doc, "more-it")), "Ver 27 más");
    assert_eq!(doc.text_content(id(&doc, "more-geo")), "Ver 11 más");
  }

  #[test]
  fn missing_keys_keep_trimmed_label_and_fallback_less() {
    let (mut doc, tabs) = setup(&Dictionary::default());
    let more = id(&doc, "more-it");
    assert_eq!(doc.text_content(more), "Ver más");
    assert_eq!(tabs.toggle_gallery(&mut doc, more, &Dictionary::default()), Some(false));
    assert_eq!(doc.text_content(more), "Ver menos");
  }

  #[test]
  fn toggle_flips_gallery_and_label() {
    let (mut doc, tabs) = setup(&es());
    let more = id(&doc, "more-geo");
    assert_eq!(tabs.toggle_gallery(&mut doc, more, &es()), Some(false));
    assert!(!doc.has_class(id(&doc, "gal-geo"), "is-collapsed"));
    assert_eq!(doc.text_content(more), "Ver menos");
    assert_eq!(tabs.toggle_gallery(&mut doc, more, &es()), Some(true));
    assert_eq!(doc.text_content(more), "Ver 11 más");
  }

  #[test]
  fn select_switches_panels_and_recollapses() {
    let (mut doc, tabs) = setup(&es());
    let more_geo = id(&doc, "more-geo");
    tabs.toggle_gallery(&mut doc, more_geo, &es());
    let tab_geo = id(&doc, "tab-geo");
    tabs.select(&mut doc, tab_geo, &en());

    let (it, geo) = (id(&doc, "certs-it"), id(&doc, "certs-geo"));
    assert!(doc.has_attr(it, "hidden"));
    assert!(!doc.has_class(it, "is-active"));
    assert!(!doc.has_attr(geo, "hidden"));
    assert!(doc.has_class(geo, "is-active"));
    assert_eq!(doc.attr(id(&doc, "tab-geo"), "aria-selected"), Some("true"));
    assert_eq!(doc.attr(id(&doc, "tab-it"), "aria-selected"), Some("false"));
    assert!(doc.has_class(id(&doc, "gal-geo"), "is-collapsed"));
    assert_eq!(doc.text_content(more_geo), "View 11 more");
  }

  #[test]
  fn select_with_unknown_target_hides_all_panels() {
    let (mut doc, tabs) = setup(&es());
    let tab_bad = id(&doc, "tab-bad");
    tabs.select(&mut doc, tab_bad, &es());
    assert!(doc.has_attr(id(&doc, "certs-it"), "hidden"));
    assert!(doc.has_attr(id(&doc, "certs-geo"), "hidden"));
    assert!(doc.has_class(id(&doc, "tab-bad"), "is-active"));
  }

  #[test]
  fn refresh_follows_locale_and_state() {
    let (mut doc, tabs) = setup(&es());
    let more_it = id(&doc, "more-it");
    tabs.toggle_gallery(&mut doc, more_it, &es());
    tabs.refresh_labels(&mut doc, &en());
    assert_eq!(doc.text_content(more_it), "Show less");
    assert_eq!(doc.text_content(id(&doc, "more-geo")), "View 11 more");
  }

  #[test]
  fn no_tabs_means_no_widget() {
    let mut doc = Document::parse(r#"<section class="cert-panel"></section>"#);
    assert!(CertTabs::init(&mut doc, &es()).unwrap().is_none());
    let mut doc = Document::parse(r#"<button class="cert-tab"></button>"#);
    assert!(CertTabs::init(&mut doc, &es()).unwrap().is_none());
  }
}
