/* src/client/engine/wasm/src/runner.rs */

//! Host-facing wrapper around [`Page`]: elements are addressed by ordinal,
//! time arrives as fractional milliseconds, and mutations leave as JSON.
//! No JS types here so the whole surface is testable natively.

use folio_dom::NodeId;
use folio_engine::{EngineError, Environment, Hit, Page, PageConfig, Storage};
use tracing::debug;

/// Everything the host knows at boot.
#[derive(Debug, Clone, Default)]
pub struct BootOptions {
  pub html: String,
  pub language_hint: Option<String>,
  pub reduced_motion: bool,
  pub current_year: i32,
  /// Optional TOML overrides; blank means the built-in defaults.
  pub config_toml: Option<String>,
}

pub struct Runner<S: Storage> {
  page: Page<S>,
  /// Sub-millisecond remainder carried between `advance_time_ms` calls.
  carry_ms: f64,
}

impl<S: Storage> Runner<S> {
  pub fn boot(options: BootOptions, storage: S) -> Result<Self, EngineError> {
    let BootOptions { html, language_hint, reduced_motion, current_year, config_toml } = options;
    let config = match config_toml.as_deref().map(str::trim) {
      Some(source) if !source.is_empty() => PageConfig::from_toml(source)?,
      _ => PageConfig::default(),
    };
    let mut env = Environment::new(current_year).with_reduced_motion(reduced_motion);
    if let Some(hint) = language_hint {
      env = env.with_language_hint(hint);
    }
    let page = Page::boot(&html, env, storage, config)?;
    Ok(Self { page, carry_ms: 0.0 })
  }

  fn node(&self, ordinal: u32) -> Option<NodeId> {
    let node = self.page.document().by_ordinal(ordinal);
    if node.is_none() {
      debug!(ordinal, "event target is not a known element");
    }
    node
  }

  pub fn click(&mut self, ordinal: u32) -> Vec<Hit> {
    match self.node(ordinal) {
      Some(node) => self.page.click(node),
      None => Vec::new(),
    }
  }

  pub fn touch(&mut self, ordinal: u32) -> Vec<Hit> {
    match self.node(ordinal) {
      Some(node) => self.page.touch(node),
      None => Vec::new(),
    }
  }

  pub fn key_down(&mut self, key: &str) -> Vec<Hit> {
    self.page.key_down(key)
  }

  /// Advance the page clock. Negative and non-finite deltas are ignored;
  /// fractions accumulate until they add up to whole milliseconds.
  pub fn advance_time_ms(&mut self, dt_ms: f64) {
    if !dt_ms.is_finite() || dt_ms <= 0.0 {
      return;
    }
    let total = self.carry_ms + dt_ms;
    let whole = total.floor();
    self.carry_ms = total - whole;
    // `as` saturates for values beyond u64.
    let ms = whole as u64;
    if ms > 0 {
      self.page.advance_time(ms);
    }
  }

  /// Apply a locale code and return the code that ended up active.
  pub fn apply_locale(&mut self, code: &str) -> &'static str {
    self.page.apply_locale_code(code);
    self.page.active_locale().code()
  }

  pub fn active_locale(&self) -> &'static str {
    self.page.active_locale().code()
  }

  pub fn take_mutations_json(&mut self) -> Result<String, serde_json::Error> {
    serde_json::to_string(&self.page.take_mutations())
  }

  pub fn hits_json(hits: &[Hit]) -> Result<String, serde_json::Error> {
    serde_json::to_string(hits)
  }

  pub fn html(&self) -> String {
    self.page.document().serialize()
  }

  pub fn page(&self) -> &Page<S> {
    &self.page
  }
}
