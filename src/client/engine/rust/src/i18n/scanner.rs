/* src/client/engine/rust/src/i18n/scanner.rs */

use folio_dom::{Document, NodeId};
use serde_json::Value;
use tracing::debug;

use super::Dictionary;
use super::marker::{MarkerKind, MarkerSpec, SkippedPair};

/// What one scan pass did. Counts are dictionary hits, whether or not the
/// written value differed from the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
  pub texts: usize,
  pub attrs: usize,
  pub data: usize,
  /// Keys referenced by a marker but absent from the dictionary, in
  /// document order.
  pub missing_keys: Vec<String>,
  pub skipped: Vec<SkippedPair>,
}

impl ScanReport {
  pub fn writes(&self) -> usize {
    self.texts + self.attrs + self.data
  }
}

/// Rewrites marked elements from a dictionary.
pub struct Scanner;

impl Scanner {
  /// Run the text, attribute and dataset passes, each in document order.
  /// Missing keys leave the node untouched.
  pub fn apply(doc: &mut Document, dict: &Dictionary) -> ScanReport {
    let mut report = ScanReport::default();
    let elements = doc.elements();

    for &node in &elements {
      let Some(key) = doc.attr(node, MarkerKind::Text.attribute()) else {
        continue;
      };
      if key.is_empty() {
        continue;
      }
      match dict.get(key) {
        Some(value) => {
          doc.set_text_content(node, value);
          report.texts += 1;
        }
        None => report.missing_keys.push(key.to_string()),
      }
    }

    for kind in [MarkerKind::Attr, MarkerKind::Data] {
      for &node in &elements {
        Self::apply_pairs(doc, dict, node, kind, &mut report);
      }
    }

    debug!(
      texts = report.texts,
      attrs = report.attrs,
      data = report.data,
      missing = report.missing_keys.len(),
      skipped = report.skipped.len(),
      "scan applied"
    );
    report
  }

  fn apply_pairs(
    doc: &mut Document,
    dict: &Dictionary,
    node: NodeId,
    kind: MarkerKind,
    report: &mut ScanReport,
  ) {
    let Some(raw) = doc.attr(node, kind.attribute()) else {
      return;
    };
    let spec = MarkerSpec::parse(raw);
    report.skipped.extend(spec.skipped);
    for pair in spec.pairs {
      let Some(value) = dict.get(&pair.key) else {
        report.missing_keys.push(pair.key);
        continue;
      };
      match kind {
        MarkerKind::Attr => {
          doc.set_attr(node, &pair.name, value);
          report.attrs += 1;
        }
        MarkerKind::Data => {
          doc.dataset_set(node, &pair.name, value);
          report.data += 1;
        }
        MarkerKind::Text => {}
      }
    }
  }
}

/// Phrase list carried by the kicker word element: its `data-kicker-list`
/// JSON array when that parses to a non-empty array, else a single entry
/// holding the element's trimmed text. Never empty.
pub fn kicker_phrases(doc: &Document, word: NodeId) -> Vec<String> {
  let parsed = doc
    .dataset_get(word, "kickerList")
    .and_then(|raw| serde_json::from_str::<Vec<Value>>(raw).ok())
    .filter(|list| !list.is_empty());
  match parsed {
    Some(list) => list
      .into_iter()
      .map(|v| match v {
        Value::String(s) => s,
        other => other.to_string(),
      })
      .collect(),
    None => vec![doc.text_content(word).trim().to_string()],
  }
}
