/* src/client/engine/rust/src/i18n/resolve.rs */

use super::Locale;

pub struct ResolveContext<'a> {
  /// Value read from durable storage, if any.
  pub stored: Option<&'a str>,
  /// Client language preference (`navigator.language`).
  pub language_hint: Option<&'a str>,
  pub default_locale: Locale,
}

/// Resolve chain: stored choice -> language hint prefix -> default.
///
/// A non-empty stored value always wins, even when it is not a known code
/// (it then maps to the default). An empty stored value counts as absent.
pub fn resolve_initial_locale(ctx: &ResolveContext<'_>) -> Locale {
  if let Some(stored) = ctx.stored.filter(|s| !s.is_empty()) {
    return Locale::parse(stored).unwrap_or(ctx.default_locale);
  }

  if let Some(hint) = ctx.language_hint {
    let hint = hint.trim().to_ascii_lowercase();
    if hint.starts_with("pt") {
      return Locale::PtBr;
    }
    if hint.starts_with("en") {
      return Locale::En;
    }
  }

  ctx.default_locale
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx<'a>(stored: Option<&'a str>, hint: Option<&'a str>) -> ResolveContext<'a> {
    ResolveContext { stored, language_hint: hint, default_locale: Locale::Es }
  }

  #[test]
  fn stored_wins() {
    assert_eq!(resolve_initial_locale(&ctx(Some("en"), Some("pt-BR"))), Locale::En);
  }

  #[test]
  fn stored_unknown_falls_back_to_default() {
    assert_eq!(resolve_initial_locale(&ctx(Some("fr"), Some("en-US"))), Locale::Es);
  }

  #[test]
  fn empty_stored_is_absent() {
    assert_eq!(resolve_initial_locale(&ctx(Some(""), Some("en-GB"))), Locale::En);
  }

  #[test]
  fn hint_prefixes() {
    assert_eq!(resolve_initial_locale(&ctx(None, Some("pt-BR"))), Locale::PtBr);
    assert_eq!(resolve_initial_locale(&ctx(None, Some("PT-pt"))), Locale::PtBr);
    assert_eq!(resolve_initial_locale(&ctx(None, Some("en-US"))), Locale::En);
    assert_eq!(resolve_initial_locale(&ctx(None, Some("de-DE"))), Locale::Es);
  }

  #[test]
  fn no_signal_uses_default() {
    let ctx = ResolveContext { stored: None, language_hint: None, default_locale: Locale::En };
    assert_eq!(resolve_initial_locale(&ctx), Locale::En);
  }
}
