/* src/client/engine/rust/src/storage.rs */

use std::collections::BTreeMap;

/// Durable string storage (`localStorage` in a browser).
pub trait Storage {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: &str);
}

/// In-process storage. Also the fallback when the host has no durable store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
  entries: BTreeMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert, handy for seeding a "previous visit".
  #[must_use]
  pub fn with(mut self, key: &str, value: &str) -> Self {
    self.entries.insert(key.to_string(), value.to_string());
    self
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set(&mut self, key: &str, value: &str) {
    self.entries.insert(key.to_string(), value.to_string());
  }
}

impl<S: Storage + ?Sized> Storage for &mut S {
  fn get(&self, key: &str) -> Option<String> {
    (**self).get(key)
  }

  fn set(&mut self, key: &str, value: &str) {
    (**self).set(key, value);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_then_get() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get("lang"), None);
    storage.set("lang", "en");
    assert_eq!(storage.get("lang").as_deref(), Some("en"));
    storage.set("lang", "pt-BR");
    assert_eq!(storage.get("lang").as_deref(), Some("pt-BR"));
  }

  #[test]
  fn seeded() {
    let storage = MemoryStorage::new().with("lang", "es");
    assert_eq!(storage.get("lang").as_deref(), Some("es"));
  }

  #[test]
  fn borrowed_storage_writes_through() {
    let mut inner = MemoryStorage::new();
    {
      let mut borrowed = &mut inner;
      Storage::set(&mut borrowed, "k", "v");
    }
    assert_eq!(inner.get("k").as_deref(), Some("v"));
  }
}
