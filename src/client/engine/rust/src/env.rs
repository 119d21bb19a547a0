/* src/client/engine/rust/src/env.rs */

/// Signals the host reads from the browser at boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
  /// `navigator.language`.
  pub language_hint: Option<String>,
  /// `prefers-reduced-motion: reduce`.
  pub reduced_motion: bool,
  pub current_year: i32,
}

impl Environment {
  pub fn new(current_year: i32) -> Self {
    Self { language_hint: None, reduced_motion: false, current_year }
  }

  #[must_use]
  pub fn with_language_hint(mut self, hint: impl Into<String>) -> Self {
    self.language_hint = Some(hint.into());
    self
  }

  #[must_use]
  pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
    self.reduced_motion = reduced;
    self
  }
}
