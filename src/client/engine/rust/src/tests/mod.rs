/* src/client/engine/rust/src/tests/mod.rs */

mod markers;
mod page_flow;

use folio_dom::NodeId;

use crate::{Environment, MemoryStorage, Page, PageConfig};

const FIXTURE: &str = include_str!("fixtures/index.html");

fn env() -> Environment {
  Environment::new(2026)
}

fn boot(env: Environment, storage: MemoryStorage) -> Page {
  Page::boot(FIXTURE, env, storage, PageConfig::default()).unwrap()
}

fn boot_default() -> Page {
  boot(env(), MemoryStorage::new())
}

fn node(page: &Page, id: &str) -> NodeId {
  page.document().element_by_id(id).unwrap_or_else(|| panic!("fixture has no #{id}"))
}

fn text(page: &Page, id: &str) -> String {
  page.document().text_content(node(page, id))
}

fn attr(page: &Page, id: &str, name: &str) -> Option<String> {
  page.document().attr(node(page, id), name).map(str::to_string)
}

fn click(page: &mut Page, id: &str) {
  let target = node(page, id);
  page.click(target);
}

/// Phrases of the built-in `kicker_list` entry for a locale.
fn kicker_list(locale: crate::Locale) -> Vec<String> {
  let store = crate::DictionaryStore::builtin().unwrap();
  serde_json::from_str(store.get(locale).get("kicker_list").unwrap()).unwrap()
}
