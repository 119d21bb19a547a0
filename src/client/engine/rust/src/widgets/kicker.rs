/* src/client/engine/rust/src/widgets/kicker.rs */

use folio_dom::{Document, NodeId};
use tracing::{debug, trace};

use crate::config::KickerSection;
use crate::error::{EngineError, selector};
use crate::scheduler::{Scheduler, Task, TaskHandle};

const OUT_CLASS: &str = "is-out";

/// Rotating phrase under the heading.
#[derive(Debug, Clone)]
pub struct Kicker {
  word: NodeId,
  defaults: Vec<String>,
  phrases: Option<Vec<String>>,
  cursor: usize,
  interval_ms: u64,
  fade_ms: u64,
  interval: Option<TaskHandle>,
  pending_advance: Option<TaskHandle>,
}

impl Kicker {
  /// Locate `.kicker-dynamic .kicker-word`. Starting is separate, see
  /// [`Kicker::start`].
  pub fn init(doc: &Document, config: &KickerSection) -> Result<Option<Self>, EngineError> {
    let Some(word) = doc.query_selector(&selector(".kicker-dynamic .kicker-word")?) else {
      debug!("kicker: no .kicker-dynamic .kicker-word element");
      return Ok(None);
    };
    Ok(Some(Self {
      word,
      defaults: config.phrases.clone(),
      phrases: None,
      cursor: 0,
      interval_ms: config.interval_ms,
      fade_ms: config.fade_ms,
      interval: None,
      pending_advance: None,
    }))
  }

  pub fn word(&self) -> NodeId {
    self.word
  }

  /// Replace the active list. An empty list restores the defaults.
  pub fn set_phrases(&mut self, phrases: Vec<String>) {
    self.phrases = Some(phrases).filter(|p| !p.is_empty());
  }

  pub fn phrases(&self) -> &[String] {
    match &self.phrases {
      Some(p) => p,
      None => &self.defaults,
    }
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn is_running(&self) -> bool {
    self.interval.is_some()
  }

  /// (Re)start the rotation from the first phrase. Any running interval and
  /// any pending advance are cancelled first. With reduced motion the first
  /// phrase is shown and no timer is armed.
  pub fn start(&mut self, doc: &mut Document, scheduler: &mut Scheduler, reduced_motion: bool) {
    self.stop(scheduler);
    self.cursor = 0;
    doc.remove_class(self.word, OUT_CLASS);
    if reduced_motion {
      if let Some(first) = self.phrases().first().cloned() {
        doc.set_text_content(self.word, &first);
      }
      debug!("kicker: reduced motion, rotation disabled");
      return;
    }
    self.interval = Some(scheduler.set_interval(self.interval_ms, Task::KickerFadeOut));
    debug!(phrases = self.phrases().len(), every_ms = self.interval_ms, "kicker started");
  }

  pub fn stop(&mut self, scheduler: &mut Scheduler) {
    if let Some(handle) = self.interval.take() {
      scheduler.cancel(handle);
    }
    if let Some(handle) = self.pending_advance.take() {
      scheduler.cancel(handle);
    }
  }

  pub fn on_fade_out(&mut self, doc: &mut Document, scheduler: &mut Scheduler) {
    doc.add_class(self.word, OUT_CLASS);
    if let Some(stale) = self.pending_advance.take() {
      scheduler.cancel(stale);
    }
    self.pending_advance = Some(scheduler.set_timeout(self.fade_ms, Task::KickerAdvance));
  }

  pub fn on_advance(&mut self, doc: &mut Document) {
    self.pending_advance = None;
    let len = self.phrases().len();
    if len == 0 {
      return;
    }
    self.cursor = (self.cursor + 1) % len;
    let phrase = self.phrases()[self.cursor].clone();
    trace!(cursor = self.cursor, "kicker advanced");
    doc.set_text_content(self.word, &phrase);
    doc.remove_class(self.word, OUT_CLASS);
  }
}
