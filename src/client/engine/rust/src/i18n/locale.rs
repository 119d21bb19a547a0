/* src/client/engine/rust/src/i18n/locale.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of display languages. Spanish is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
  #[default]
  #[serde(rename = "es")]
  Es,
  #[serde(rename = "en")]
  En,
  #[serde(rename = "pt-BR")]
  PtBr,
}

impl Locale {
  pub const ALL: [Locale; 3] = [Locale::Es, Locale::En, Locale::PtBr];

  pub fn code(self) -> &'static str {
    match self {
      Self::Es => "es",
      Self::En => "en",
      Self::PtBr => "pt-BR",
    }
  }

  /// Parse a locale code. Matching is case-insensitive; any `pt` region
  /// maps to Brazilian Portuguese.
  pub fn parse(code: &str) -> Option<Self> {
    let code = code.trim().to_ascii_lowercase();
    match code.as_str() {
      "es" => Some(Self::Es),
      "en" => Some(Self::En),
      "pt" => Some(Self::PtBr),
      c if c.starts_with("pt-") => Some(Self::PtBr),
      _ => None,
    }
  }

  /// Value for `<html lang>`.
  pub fn html_lang(self) -> &'static str {
    self.code()
  }

  /// Short label shown on the language toggle button.
  pub fn label(self) -> &'static str {
    match self {
      Self::Es => "ES",
      Self::En => "EN",
      Self::PtBr => "PT",
    }
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Self::Es => 0,
      Self::En => 1,
      Self::PtBr => 2,
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
