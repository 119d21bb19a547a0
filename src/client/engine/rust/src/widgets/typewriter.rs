/* src/client/engine/rust/src/widgets/typewriter.rs */

use folio_dom::{Document, NodeId};
use tracing::debug;

use crate::error::{EngineError, selector};
use crate::scheduler::{Scheduler, Task};

/// One-shot typing effect on `.h1-typing`.
#[derive(Debug, Clone)]
pub struct Typewriter {
  el: NodeId,
  step_ms: u64,
  text: Vec<char>,
  revealed: usize,
  ran: bool,
}

impl Typewriter {
  pub fn init(doc: &Document, step_ms: u64) -> Result<Option<Self>, EngineError> {
    let Some(el) = doc.query_selector(&selector(".h1-typing")?) else {
      debug!("typewriter: no .h1-typing element");
      return Ok(None);
    };
    Ok(Some(Self { el, step_ms, text: Vec::new(), revealed: 0, ran: false }))
  }

  pub fn element(&self) -> NodeId {
    self.el
  }

  pub fn has_run(&self) -> bool {
    self.ran
  }

  pub fn is_done(&self) -> bool {
    self.ran && self.revealed >= self.text.len()
  }

  /// Clear the heading and arm the first step. Returns false when skipped:
  /// already run, reduced motion, or nothing to type. Skips do not consume
  /// the one shot.
  pub fn start(&mut self, doc: &mut Document, scheduler: &mut Scheduler, reduced_motion: bool) -> bool {
    if reduced_motion || self.ran {
      return false;
    }
    let text = doc.text_content(self.el).trim().to_string();
    if text.is_empty() {
      return false;
    }
    self.ran = true;
    self.text = text.chars().collect();
    self.revealed = 0;
    doc.set_text_content(self.el, "");
    scheduler.set_timeout(self.step_ms, Task::TypewriterStep);
    debug!(chars = self.text.len(), "typewriter started");
    true
  }

  /// Pick up text rewritten under a running animation (a locale change)
  /// and keep revealing it from the same position.
  pub fn retarget(&mut self, doc: &mut Document) {
    if !self.ran || self.is_done() {
      return;
    }
    self.text = doc.text_content(self.el).trim().chars().collect();
    self.revealed = self.revealed.min(self.text.len());
    let shown: String = self.text[..self.revealed].iter().collect();
    doc.set_text_content(self.el, &shown);
  }

  pub fn on_step(&mut self, doc: &mut Document, scheduler: &mut Scheduler) {
    if self.revealed >= self.text.len() {
      return;
    }
    self.revealed += 1;
    let shown: String = self.text[..self.revealed].iter().collect();
    doc.set_text_content(self.el, &shown);
    if self.revealed < self.text.len() {
      scheduler.set_timeout(self.step_ms, Task::TypewriterStep);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn setup(html: &str) -> (Document, Typewriter, Scheduler) {
    let doc = Document::parse(html);
    let tw = Typewriter::init(&doc, 38).unwrap().unwrap();
    (doc, tw, Scheduler::new())
  }

  fn run(tw: &mut Typewriter, doc: &mut Document, s: &mut Scheduler, until: u64) {
    while let Some((_, task)) = s.pop_due(until) {
      if task == Task::TypewriterStep {
        tw.on_step(doc, s);
      }
    }
    s.advance_to(until);
  }

  #[test]
  fn reveals_one_char_per_step() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">  Hola  </h1>"#);
    assert!(tw.start(&mut doc, &mut s, false));
    let el = tw.element();
    assert_eq!(doc.text_content(el), "");
    run(&mut tw, &mut doc, &mut s, 38);
    assert_eq!(doc.text_content(el), "H");
    run(&mut tw, &mut doc, &mut s, 38 * 3);
    assert_eq!(doc.text_content(el), "Hol");
    run(&mut tw, &mut doc, &mut s, 10_000);
    assert_eq!(doc.text_content(el), "Hola");
    assert!(tw.is_done());
    assert_eq!(s.pending(), 0);
  }

  #[test]
  fn runs_once() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">Hi</h1>"#);
    assert!(tw.start(&mut doc, &mut s, false));
    run(&mut tw, &mut doc, &mut s, 1000);
    assert!(!tw.start(&mut doc, &mut s, false));
    assert_eq!(s.pending(), 0);
    assert_eq!(doc.text_content(tw.element()), "Hi");
  }

  #[test]
  fn counts_scalar_values() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">Olá ✓</h1>"#);
    tw.start(&mut doc, &mut s, false);
    run(&mut tw, &mut doc, &mut s, 38 * 3);
    assert_eq!(doc.text_content(tw.element()), "Olá");
    run(&mut tw, &mut doc, &mut s, 38 * 5);
    assert_eq!(doc.text_content(tw.element()), "Olá ✓");
  }

  #[test]
  fn reduced_motion_or_empty_text_skips_without_consuming() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">Hi</h1>"#);
    assert!(!tw.start(&mut doc, &mut s, true));
    assert!(!tw.has_run());
    assert_eq!(doc.text_content(tw.element()), "Hi");

    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">   </h1>"#);
    assert!(!tw.start(&mut doc, &mut s, false));
    assert!(!tw.has_run());
    assert_eq!(s.pending(), 0);
  }

  #[test]
  fn retarget_switches_text_mid_animation() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">Hola mundo</h1>"#);
    tw.start(&mut doc, &mut s, false);
    run(&mut tw, &mut doc, &mut s, 38 * 3);
    doc.set_text_content(tw.element(), "Hello world");
    tw.retarget(&mut doc);
    assert_eq!(doc.text_content(tw.element()), "Hel");
    run(&mut tw, &mut doc, &mut s, 10_000);
    assert_eq!(doc.text_content(tw.element()), "Hello world");
    assert!(tw.is_done());
    assert!(!tw.start(&mut doc, &mut s, false));
  }

  #[test]
  fn retarget_to_shorter_text_finishes() {
    let (mut doc, mut tw, mut s) = setup(r#"<h1 class="h1-typing">Infraestructura</h1>"#);
    tw.start(&mut doc, &mut s, false);
    run(&mut tw, &mut doc, &mut s, 38 * 6);
    doc.set_text_content(tw.element(), "Infra");
    tw.retarget(&mut doc);
    assert!(tw.is_done());
    run(&mut tw, &mut doc, &mut s, 10_000);
    assert_eq!(doc.text_content(tw.element()), "Infra");
    assert_eq!(s.pending(), 0);
  }

  #[test]
  fn retarget_before_start_leaves_text() {
    let (mut doc, mut tw, _) = setup(r#"<h1 class="h1-typing">Hola</h1>"#);
    tw.retarget(&mut doc);
    assert_eq!(doc.text_content(tw.element()), "Hola");
    assert!(doc.mutations().is_empty());
  }
}
