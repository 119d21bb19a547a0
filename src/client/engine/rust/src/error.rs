/* src/client/engine/rust/src/error.rs */

use folio_dom::{Selector, SelectorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse page config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("invalid page config: {0}")]
  Invalid(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error("invalid selector `{selector}`: {source}")]
  Selector { selector: String, source: SelectorError },
  #[error("dictionary for `{locale}` must be a JSON object of strings: {source}")]
  Dictionary { locale: String, source: serde_json::Error },
}

/// Parse a selector, attaching the source text to the error.
pub(crate) fn selector(source: &str) -> Result<Selector, EngineError> {
  Selector::parse(source)
    .map_err(|source_err| EngineError::Selector { selector: source.to_string(), source: source_err })
}
