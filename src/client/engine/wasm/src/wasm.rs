/* src/client/engine/wasm/src/wasm.rs */

use folio_engine::{Hit, MemoryStorage, Storage};
use wasm_bindgen::prelude::*;

use crate::runner::{BootOptions, Runner};

/// `localStorage` when the browser grants it, memory otherwise. Writes
/// that the browser rejects (quota, private mode) land in memory.
struct BrowserStorage {
  local: Option<web_sys::Storage>,
  memory: MemoryStorage,
}

impl BrowserStorage {
  fn open() -> Self {
    let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    Self { local, memory: MemoryStorage::new() }
  }
}

impl Storage for BrowserStorage {
  fn get(&self, key: &str) -> Option<String> {
    let stored = self.local.as_ref().and_then(|s| s.get_item(key).ok().flatten());
    stored.or_else(|| self.memory.get(key))
  }

  fn set(&mut self, key: &str, value: &str) {
    let persisted = self.local.as_ref().is_some_and(|s| s.set_item(key, value).is_ok());
    if !persisted {
      self.memory.set(key, value);
    }
  }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
  JsValue::from_str(&err.to_string())
}

fn hits_to_js(hits: &[Hit]) -> Result<String, JsValue> {
  Runner::<BrowserStorage>::hits_json(hits).map_err(to_js)
}

/// Routes panics to `console.error`. Tracing output needs a subscriber
/// from the host; none is installed here.
#[wasm_bindgen(start)]
pub fn wasm_start() {
  console_error_panic_hook::set_once();
}

/// A booted page driven by the host: it forwards DOM events by element
/// ordinal, ticks the clock from `requestAnimationFrame`, and replays the
/// returned mutations onto the live document.
#[wasm_bindgen]
pub struct FolioPage {
  inner: Runner<BrowserStorage>,
}

#[wasm_bindgen]
impl FolioPage {
  #[wasm_bindgen(constructor)]
  pub fn new(
    html: String,
    language_hint: Option<String>,
    reduced_motion: bool,
    config_toml: Option<String>,
  ) -> Result<FolioPage, JsValue> {
    console_error_panic_hook::set_once();
    let current_year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX);
    let options = BootOptions { html, language_hint, reduced_motion, current_year, config_toml };
    let inner = Runner::boot(options, BrowserStorage::open()).map_err(to_js)?;
    Ok(Self { inner })
  }

  /// Returns the hits as JSON.
  pub fn click(&mut self, ordinal: u32) -> Result<String, JsValue> {
    hits_to_js(&self.inner.click(ordinal))
  }

  pub fn touch(&mut self, ordinal: u32) -> Result<String, JsValue> {
    hits_to_js(&self.inner.touch(ordinal))
  }

  #[wasm_bindgen(js_name = keyDown)]
  pub fn key_down(&mut self, key: &str) -> Result<String, JsValue> {
    hits_to_js(&self.inner.key_down(key))
  }

  #[wasm_bindgen(js_name = advanceTime)]
  pub fn advance_time(&mut self, dt_ms: f64) {
    self.inner.advance_time_ms(dt_ms);
  }

  #[wasm_bindgen(js_name = applyLocale)]
  pub fn apply_locale(&mut self, code: &str) -> String {
    self.inner.apply_locale(code).to_string()
  }

  #[wasm_bindgen(js_name = activeLocale)]
  pub fn active_locale(&self) -> String {
    self.inner.active_locale().to_string()
  }

  /// Drain pending DOM mutations as a JSON array.
  #[wasm_bindgen(js_name = takeMutations)]
  pub fn take_mutations(&mut self) -> Result<String, JsValue> {
    self.inner.take_mutations_json().map_err(to_js)
  }

  pub fn html(&self) -> String {
    self.inner.html()
  }
}
