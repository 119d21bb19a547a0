/* src/client/engine/rust/src/tests/page_flow.rs */

use pretty_assertions::assert_eq;

use super::*;
use crate::events::Action;
use crate::{EngineError, Locale, Storage, WidgetKind};

#[test]
fn boot_fills_footer_year_and_chrome() {
  let page = boot_default();
  assert_eq!(text(&page, "year"), "2024 – 2026");
  assert_eq!(page.active_locale(), Locale::Es);
  assert_eq!(text(&page, "lang-btn"), "ES");
  assert_eq!(attr(&page, "lang-btn", "aria-label").as_deref(), Some("Cambiar idioma"));
  assert_eq!(page.storage().get("lang").as_deref(), Some("es"));
  assert_eq!(text(&page, "more-it"), "Ver 27 más");
  assert_eq!(text(&page, "more-geo"), "Ver 11 más");
}

#[test]
fn same_year_shows_only_start() {
  let page = boot(Environment::new(2024), MemoryStorage::new());
  assert_eq!(text(&page, "year"), "2024");
}

#[test]
fn language_hint_picks_initial_locale() {
  let page = boot(env().with_language_hint("en-GB"), MemoryStorage::new());
  assert_eq!(page.active_locale(), Locale::En);
  let html = page.document().document_element().unwrap();
  assert_eq!(page.document().attr(html, "lang"), Some("en"));
  assert_eq!(text(&page, "lang-btn"), "EN");
}

#[test]
fn unrecognized_stored_code_uses_default() {
  let page = boot(env().with_language_hint("en"), MemoryStorage::new().with("lang", "fr"));
  assert_eq!(page.active_locale(), Locale::Es);
  assert_eq!(page.storage().get("lang").as_deref(), Some("es"));
}

#[test]
fn lang_button_toggles_menu_and_stops() {
  let mut page = boot_default();
  let hits = page.click(node(&page, "lang-btn"));
  assert_eq!(hits.last().map(|h| h.action), Some(Action::LangToggle));
  assert!(hits.iter().all(|h| h.action != Action::LangDismiss));
  assert!(page.lang_menu_open());
  click(&mut page, "untouched");
  assert!(!page.lang_menu_open());
}

#[test]
fn lang_item_applies_locale_and_closes_menu() {
  let mut page = boot_default();
  click(&mut page, "lang-btn");
  click(&mut page, "lang-pt");
  assert!(!page.lang_menu_open());
  assert_eq!(page.active_locale(), Locale::PtBr);
  assert_eq!(text(&page, "lang-btn"), "PT");
  assert_eq!(text(&page, "nav-inicio"), "Início");
  assert_eq!(attr(&page, "cvDownload", "href").as_deref(), Some("assets/pdf/CS_DOUGLAS-MENDOZA.pdf"));
  assert_eq!(attr(&page, "cvDownload", "download").as_deref(), Some("CS_DOUGLAS-MENDOZA.pdf"));
  assert_eq!(page.storage().get("lang").as_deref(), Some("pt-BR"));
}

#[test]
fn unknown_lang_item_falls_back_to_default() {
  let mut page = boot(env().with_language_hint("en"), MemoryStorage::new());
  click(&mut page, "lang-fr");
  assert_eq!(page.active_locale(), Locale::Es);
  assert_eq!(page.storage().get("lang").as_deref(), Some("es"));
  assert_eq!(text(&page, "nav-inicio"), "Inicio");
}

#[test]
fn mobile_language_list_works_inside_open_nav() {
  let mut page = boot_default();
  click(&mut page, "nav-summary");
  click(&mut page, "mlang-en");
  assert_eq!(page.active_locale(), Locale::En);
  assert!(page.nav_open());
}

#[test]
fn nav_closes_on_link_and_outside_interaction() {
  let mut page = boot_default();
  click(&mut page, "nav-summary");
  assert!(page.nav_open());
  click(&mut page, "mnav-contacto");
  assert!(!page.nav_open());

  click(&mut page, "nav-summary");
  click(&mut page, "nav-panel");
  assert!(page.nav_open());
  let outside = node(&page, "untouched");
  page.touch(outside);
  assert!(!page.nav_open());

  click(&mut page, "nav-summary");
  click(&mut page, "nav-summary");
  assert!(!page.nav_open());
}

#[test]
fn lightbox_open_and_close_paths() {
  let mut page = boot_default();
  click(&mut page, "cert-db-thumb");
  assert!(page.lightbox_open());
  assert_eq!(attr(&page, "lightboxImg", "src").as_deref(), Some("assets/img/certs/db.webp"));
  let caption = text(&page, "lightboxCaption");
  assert!(!caption.is_empty());
  assert_eq!(attr(&page, "lightboxImg", "alt"), Some(caption));
  let body = page.document().body().unwrap();
  assert!(page.document().has_class(body, "no-scroll"));

  click(&mut page, "lightbox-content");
  assert!(page.lightbox_open());
  click(&mut page, "lightbox-close");
  assert!(!page.lightbox_open());
  assert!(!page.document().has_class(body, "no-scroll"));

  click(&mut page, "cert-db");
  let backdrop = node(&page, "lightbox");
  page.click(backdrop);
  assert!(!page.lightbox_open());

  click(&mut page, "cert-nosrc");
  assert!(!page.lightbox_open());
}

#[test]
fn lightbox_trigger_alt_is_localized() {
  let mut page = boot_default();
  page.apply_locale(Locale::En);
  let localized = attr(&page, "cert-db", "data-alt").unwrap();
  assert_eq!(localized, "Databases");
  click(&mut page, "cert-db");
  assert_eq!(text(&page, "lightboxCaption"), localized);
}

#[test]
fn zoom_modal_from_logo_and_zoomable() {
  let mut page = boot_default();
  click(&mut page, "logo-pdvsa");
  assert!(page.modal_open());
  assert_eq!(attr(&page, "img-modal-src", "alt").as_deref(), Some("Logo PDVSA"));
  let body = page.document().body().unwrap();
  assert_eq!(page.document().style_property(body, "overflow").as_deref(), Some("hidden"));

  click(&mut page, "img-close");
  assert!(!page.modal_open());
  assert_eq!(page.document().attr(body, "style"), None);

  click(&mut page, "diagram");
  assert_eq!(attr(&page, "img-modal-src", "alt").as_deref(), Some("Logo"));
  let backdrop = node(&page, "img-modal");
  page.click(backdrop);
  assert!(!page.modal_open());
}

#[test]
fn tabs_switch_panels_and_labels_follow_locale() {
  let mut page = boot_default();
  click(&mut page, "more-it");
  assert_eq!(text(&page, "more-it"), "Ver menos");
  assert!(!page.document().has_class(node(&page, "gallery-it"), "is-collapsed"));

  page.apply_locale(Locale::En);
  assert_eq!(text(&page, "more-it"), "Show less");
  assert_eq!(text(&page, "more-geo"), "View 11 more");

  click(&mut page, "tab-geo");
  assert!(page.document().has_attr(node(&page, "certs-it"), "hidden"));
  assert!(!page.document().has_attr(node(&page, "certs-geo"), "hidden"));
  assert_eq!(attr(&page, "tab-geo", "aria-selected").as_deref(), Some("true"));

  click(&mut page, "tab-it");
  assert!(page.document().has_class(node(&page, "gallery-it"), "is-collapsed"));
  assert_eq!(text(&page, "more-it"), "View 27 more");
}

#[test]
fn language_change_restarts_kicker_with_new_phrases() {
  let mut page = boot_default();
  page.advance_time(5000 + 220);
  assert_eq!(page.kicker().unwrap().cursor(), 1);

  page.apply_locale(Locale::En);
  let en = kicker_list(Locale::En);
  assert_eq!(page.kicker().unwrap().cursor(), 0);
  assert_eq!(text(&page, "kicker"), en[0]);
  assert_eq!(page.kicker().unwrap().phrases(), en.as_slice());

  page.advance_time(5000 + 220);
  assert_eq!(text(&page, "kicker"), en[1]);
}

#[test]
fn language_change_while_typing_retargets_heading() {
  let mut page = boot_default();
  let store = crate::DictionaryStore::builtin().unwrap();
  let en: Vec<char> = store.get(Locale::En).get("hero_h1").unwrap().trim().chars().collect();

  page.advance_time(190);
  page.apply_locale(Locale::En);
  let shown: String = en[..5].iter().collect();
  assert_eq!(text(&page, "title"), shown);

  page.advance_time(60_000);
  assert_eq!(page.active_locale(), Locale::En);
  assert_eq!(text(&page, "title"), en.iter().collect::<String>());
  assert!(page.typewriter().unwrap().is_done());
  assert!(!page.init_typewriter());
}

#[test]
fn escape_with_nothing_open_is_harmless() {
  let mut page = boot_default();
  page.take_mutations();
  let hits = page.key_down("Escape");
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].widget, WidgetKind::Escape);
  assert!(page.take_mutations().is_empty());
  assert!(page.key_down("Enter").is_empty());
}

#[test]
fn mutations_serialize_for_hosts() {
  let mut page = boot_default();
  page.take_mutations();
  click(&mut page, "lang-en");
  let mutations = page.take_mutations();
  assert!(!mutations.is_empty());
  let json = serde_json::to_value(&mutations).unwrap();
  assert!(json.as_array().unwrap().iter().all(|m| m.get("op").is_some()));
}

#[test]
fn invalid_config_fails_boot() {
  let mut config = PageConfig::default();
  config.kicker.phrases.clear();
  let err = Page::boot(FIXTURE, env(), MemoryStorage::new(), config).err().unwrap();
  assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn bare_page_boots_without_widgets() {
  let mut page = Page::boot("<p>hola</p>", env(), MemoryStorage::new(), PageConfig::default()).unwrap();
  assert!(page.kicker().is_none());
  assert!(page.typewriter().is_none());
  assert!(!page.init_typewriter());
  assert_eq!(page.escape(), None);
  let widgets: Vec<WidgetKind> = page.router().listeners().iter().map(|l| l.widget).collect();
  assert_eq!(widgets, vec![WidgetKind::Lang, WidgetKind::Escape]);
}
