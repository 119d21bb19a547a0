/* src/client/engine/rust/src/tests/markers.rs */

use std::collections::BTreeMap;

use folio_dom::Document;
use proptest::prelude::*;

use crate::i18n::marker::{MarkerPair, MarkerSpec};
use crate::{Dictionary, Scanner};

#[derive(Debug, Clone)]
enum Segment {
  Good { name: String, key: String, pad: String },
  Bad(String),
}

fn ident() -> impl Strategy<Value = String> {
  "[a-z][a-z0-9_-]{0,8}"
}

fn pad() -> impl Strategy<Value = String> {
  "[ \t]{0,2}"
}

fn segment() -> impl Strategy<Value = Segment> {
  prop_oneof![
    3 => (ident(), ident(), pad())
      .prop_map(|(name, key, pad)| Segment::Good { name: format!("x-{name}"), key, pad }),
    1 => (pad(), ident()).prop_map(|(p, key)| Segment::Bad(format!("{p}:{key}"))),
    1 => (ident(), pad()).prop_map(|(name, p)| Segment::Bad(format!("{name}:{p}"))),
    1 => ident().prop_map(Segment::Bad),
  ]
}

fn render(segments: &[Segment]) -> String {
  segments
    .iter()
    .map(|s| match s {
      Segment::Good { name, key, pad } => format!("{pad}{name}{pad}:{pad}{key}{pad}"),
      Segment::Bad(raw) => raw.clone(),
    })
    .collect::<Vec<_>>()
    .join(";")
}

fn good_pairs(segments: &[Segment]) -> Vec<MarkerPair> {
  segments
    .iter()
    .filter_map(|s| match s {
      Segment::Good { name, key, .. } => Some(MarkerPair { name: name.clone(), key: key.clone() }),
      Segment::Bad(_) => None,
    })
    .collect()
}

proptest! {
  #[test]
  fn parse_keeps_good_pairs_in_order(segments in proptest::collection::vec(segment(), 0..8)) {
    let spec = MarkerSpec::parse(&render(&segments));
    let bad = segments.iter().filter(|s| matches!(s, Segment::Bad(_))).count();

    prop_assert_eq!(&spec.pairs, &good_pairs(&segments));
    prop_assert_eq!(spec.skipped.len(), bad);
    for pair in &spec.pairs {
      prop_assert!(!pair.name.is_empty() && !pair.key.is_empty());
      prop_assert_eq!(pair.name.trim(), pair.name.as_str());
      prop_assert_eq!(pair.key.trim(), pair.key.as_str());
    }
  }

  #[test]
  fn scanner_sets_every_resolvable_attribute(segments in proptest::collection::vec(segment(), 1..8)) {
    let marker = render(&segments);
    let pairs = good_pairs(&segments);
    let dict: Dictionary = pairs.iter().map(|p| (p.key.clone(), format!("v-{}", p.key))).collect();
    let mut doc = Document::parse(&format!(r#"<p id="t" data-i18n-attr="{marker}"></p>"#));
    Scanner::apply(&mut doc, &dict);

    let target = doc.element_by_id("t").unwrap();
    let mut expected = BTreeMap::new();
    for pair in &pairs {
      expected.insert(pair.name.as_str(), format!("v-{}", pair.key));
    }
    for (name, value) in expected {
      prop_assert_eq!(doc.attr(target, name), Some(value.as_str()));
    }
  }
}
