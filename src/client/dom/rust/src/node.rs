/* src/client/dom/rust/src/node.rs */

use serde::Serialize;

/// Arena index of a node inside a [`crate::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
  pub fn index(self) -> usize {
    self.0
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
  pub(crate) tag: String,
  pub(crate) attrs: Vec<(String, String)>,
  /// Pre-order position among the elements of the parsed document.
  /// Stable for the lifetime of the document; hosts use it to address nodes.
  pub(crate) ordinal: u32,
}

impl Element {
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn ordinal(&self) -> u32 {
    self.ordinal
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
  }

  pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
    self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.attr("class").is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
  Document,
  Doctype(String),
  Element(Element),
  Text(String),
  Comment(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
  pub(crate) data: NodeData,
  pub(crate) parent: Option<NodeId>,
  pub(crate) children: Vec<NodeId>,
}

impl Node {
  pub(crate) fn new(data: NodeData, parent: Option<NodeId>) -> Self {
    Self { data, parent, children: Vec::new() }
  }
}

// HTML elements that never have content.
const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
  "wbr",
];

pub(crate) fn is_void_element(tag: &str) -> bool {
  VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn is_raw_text_element(tag: &str) -> bool {
  tag == "script" || tag == "style"
}
