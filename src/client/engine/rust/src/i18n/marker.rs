/* src/client/engine/rust/src/i18n/marker.rs */

/// The three localization markers an element may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
  /// `data-i18n="key"`: replaces the element's text.
  Text,
  /// `data-i18n-attr="attr:key;attr:key"`: sets attributes.
  Attr,
  /// `data-i18n-data="name:key;name:key"`: sets dataset entries.
  Data,
}

impl MarkerKind {
  pub fn attribute(self) -> &'static str {
    match self {
      Self::Text => "data-i18n",
      Self::Attr => "data-i18n-attr",
      Self::Data => "data-i18n-data",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
  /// Attribute name, or dataset name for [`MarkerKind::Data`].
  pub name: String,
  pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  MissingName,
  MissingKey,
}

/// A pair that could not be used, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPair {
  pub raw: String,
  pub reason: SkipReason,
}

/// Parsed form of a `name:key;name:key` marker value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSpec {
  pub pairs: Vec<MarkerPair>,
  pub skipped: Vec<SkippedPair>,
}

impl MarkerSpec {
  /// Parse a marker value. Blank segments (`a:b;;c:d`, trailing `;`) are
  /// separators, not pairs. Only the first two `:` segments of a pair are
  /// read; name and key are trimmed.
  pub fn parse(raw: &str) -> Self {
    let mut spec = Self::default();
    for segment in raw.split(';') {
      if segment.trim().is_empty() {
        continue;
      }
      let mut parts = segment.split(':').map(str::trim);
      let name = parts.next().unwrap_or_default();
      let key = parts.next().unwrap_or_default();
      let reason = if name.is_empty() {
        Some(SkipReason::MissingName)
      } else if key.is_empty() {
        Some(SkipReason::MissingKey)
      } else {
        None
      };
      match reason {
        Some(reason) => spec.skipped.push(SkippedPair { raw: segment.to_string(), reason }),
        None => spec.pairs.push(MarkerPair { name: name.to_string(), key: key.to_string() }),
      }
    }
    spec
  }
}
