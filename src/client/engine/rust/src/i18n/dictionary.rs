/* src/client/engine/rust/src/i18n/dictionary.rs */

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Locale;
use crate::error::EngineError;

const BUILTIN_ES: &str = include_str!("../../locales/es.json");
const BUILTIN_EN: &str = include_str!("../../locales/en.json");
const BUILTIN_PT_BR: &str = include_str!("../../locales/pt-BR.json");

/// Key -> display string for one locale. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
  entries: BTreeMap<String, String>,
}

impl Dictionary {
  /// Parse a flat JSON object whose values are all strings.
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
  }
}

/// One dictionary per supported locale; lookups by locale never fail.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
  dictionaries: [Dictionary; 3],
}

impl DictionaryStore {
  pub fn new(es: Dictionary, en: Dictionary, pt_br: Dictionary) -> Self {
    Self { dictionaries: [es, en, pt_br] }
  }

  /// The dictionaries bundled with the crate.
  pub fn builtin() -> Result<Self, EngineError> {
    Self::from_json(BUILTIN_ES, BUILTIN_EN, BUILTIN_PT_BR)
  }

  pub fn from_json(es: &str, en: &str, pt_br: &str) -> Result<Self, EngineError> {
    let load = |locale: Locale, json: &str| {
      Dictionary::from_json(json)
        .map_err(|source| EngineError::Dictionary { locale: locale.code().to_string(), source })
    };
    Ok(Self::new(load(Locale::Es, es)?, load(Locale::En, en)?, load(Locale::PtBr, pt_br)?))
  }

  pub fn get(&self, locale: Locale) -> &Dictionary {
    &self.dictionaries[locale.index()]
  }
}
