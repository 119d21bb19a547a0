/* src/client/engine/rust/src/i18n/session.rs */

use tracing::debug;

use super::{Dictionary, DictionaryStore, Locale};
use crate::storage::Storage;

/// The active-language context every localized widget reads from.
pub struct LocaleSession<S: Storage> {
  active: Locale,
  store: DictionaryStore,
  storage: S,
  storage_key: String,
}

impl<S: Storage> LocaleSession<S> {
  /// Create a session without touching storage. Call [`Self::select`] to
  /// make a choice durable.
  pub fn new(store: DictionaryStore, storage: S, storage_key: impl Into<String>, initial: Locale) -> Self {
    Self { active: initial, store, storage, storage_key: storage_key.into() }
  }

  pub fn active(&self) -> Locale {
    self.active
  }

  /// Switch the active language and persist its code immediately.
  pub fn select(&mut self, locale: Locale) {
    self.active = locale;
    self.storage.set(&self.storage_key, locale.code());
    debug!(locale = locale.code(), key = %self.storage_key, "locale selected");
  }

  /// Previously persisted value, raw.
  pub fn stored(&self) -> Option<String> {
    self.storage.get(&self.storage_key)
  }

  pub fn dictionary(&self) -> &Dictionary {
    self.store.get(self.active)
  }

  pub fn text(&self, key: &str) -> Option<&str> {
    self.dictionary().get(key)
  }

  pub fn store(&self) -> &DictionaryStore {
    &self.store
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  pub fn into_storage(self) -> S {
    self.storage
  }
}
