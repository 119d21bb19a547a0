/* src/client/dom/rust/src/document.rs */

use crate::escape::{escape_attr, escape_text};
use crate::mutation::Mutation;
use crate::node::{Element, Node, NodeData, NodeId, is_raw_text_element, is_void_element};
use crate::parser;
use crate::selector::Selector;

/// Map a dataset property name (`kickerList`) to its attribute name
/// (`data-kicker-list`).
pub fn dataset_attr_name(name: &str) -> String {
  let mut out = String::with_capacity(name.len() + 6);
  out.push_str("data-");
  for ch in name.chars() {
    if ch.is_ascii_uppercase() {
      out.push('-');
      out.push(ch.to_ascii_lowercase());
    } else {
      out.push(ch);
    }
  }
  out
}

/// Arena-backed document. Element ids stay valid for the document's
/// lifetime. Text nodes dropped by [`Document::set_text_content`] go to a
/// free list and their slots are reused by later writes.
#[derive(Debug, Clone)]
pub struct Document {
  nodes: Vec<Node>,
  by_ordinal: Vec<NodeId>,
  free_text: Vec<NodeId>,
  mutations: Vec<Mutation>,
}

impl Document {
  pub fn parse(html: &str) -> Self {
    let nodes = parser::parse(html);
    let by_ordinal = (0..nodes.len())
      .filter(|&i| matches!(nodes[i].data, NodeData::Element(_)))
      .map(NodeId)
      .collect();
    Self { nodes, by_ordinal, free_text: Vec::new(), mutations: Vec::new() }
  }

  pub fn root(&self) -> NodeId {
    NodeId(0)
  }

  /// Arena slots in use, attached or not.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn data(&self, node: NodeId) -> Option<&NodeData> {
    self.nodes.get(node.0).map(|n| &n.data)
  }

  pub fn element(&self, node: NodeId) -> Option<&Element> {
    match self.data(node)? {
      NodeData::Element(el) => Some(el),
      _ => None,
    }
  }

  fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
    match &mut self.nodes.get_mut(node.0)?.data {
      NodeData::Element(el) => Some(el),
      _ => None,
    }
  }

  pub fn tag(&self, node: NodeId) -> Option<&str> {
    self.element(node).map(Element::tag)
  }

  pub fn ordinal(&self, node: NodeId) -> Option<u32> {
    self.element(node).map(Element::ordinal)
  }

  pub fn by_ordinal(&self, ordinal: u32) -> Option<NodeId> {
    self.by_ordinal.get(ordinal as usize).copied()
  }

  pub fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.nodes.get(node.0)?.parent
  }

  pub fn parent_element(&self, node: NodeId) -> Option<NodeId> {
    self.parent(node).filter(|&p| self.element(p).is_some())
  }

  pub fn children(&self, node: NodeId) -> &[NodeId] {
    self.nodes.get(node.0).map_or(&[], |n| n.children.as_slice())
  }

  /// Pre-order descendants of `node`, excluding `node` itself.
  pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
      out.push(id);
      stack.extend(self.children(id).iter().rev().copied());
    }
    out
  }

  /// Attached elements in document order.
  pub fn elements(&self) -> Vec<NodeId> {
    self.descendants(self.root()).into_iter().filter(|&id| self.element(id).is_some()).collect()
  }

  /// Inclusive containment, like `Node.contains`.
  pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
    let mut current = Some(node);
    while let Some(id) = current {
      if id == ancestor {
        return true;
      }
      current = self.parent(id);
    }
    false
  }

  pub fn document_element(&self) -> Option<NodeId> {
    self.children(self.root()).iter().copied().find(|&id| self.element(id).is_some())
  }

  pub fn body(&self) -> Option<NodeId> {
    self.elements().into_iter().find(|&id| self.tag(id) == Some("body"))
  }

  pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
    self.elements().into_iter().find(|&n| self.attr(n, "id") == Some(id))
  }

  // -- attributes --

  pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
    self.element(node)?.attr(name)
  }

  pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
    self.attr(node, name).is_some()
  }

  pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
    let Some(el) = self.element_mut(node) else {
      return;
    };
    let ordinal = el.ordinal;
    match el.attrs.iter_mut().find(|(n, _)| *n == name) {
      Some((_, v)) if *v == value => return,
      Some((_, v)) => *v = value.to_string(),
      None => el.attrs.push((name.to_string(), value.to_string())),
    }
    self.mutations.push(Mutation::SetAttr {
      node: ordinal,
      name: name.to_string(),
      value: value.to_string(),
    });
  }

  pub fn remove_attr(&mut self, node: NodeId, name: &str) {
    let Some(el) = self.element_mut(node) else {
      return;
    };
    let before = el.attrs.len();
    el.attrs.retain(|(n, _)| n != name);
    if el.attrs.len() != before {
      let ordinal = el.ordinal;
      self.mutations.push(Mutation::RemoveAttr { node: ordinal, name: name.to_string() });
    }
  }

  /// Set or remove a boolean attribute such as `hidden` or `open`.
  pub fn set_flag(&mut self, node: NodeId, name: &str, on: bool) {
    if on {
      if !self.has_attr(node, name) {
        self.set_attr(node, name, "");
      }
    } else {
      self.remove_attr(node, name);
    }
  }

  // -- class list --

  pub fn has_class(&self, node: NodeId, class: &str) -> bool {
    self.element(node).is_some_and(|el| el.has_class(class))
  }

  pub fn add_class(&mut self, node: NodeId, class: &str) {
    if self.element(node).is_none() || self.has_class(node, class) {
      return;
    }
    let value = match self.attr(node, "class") {
      Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim_end()),
      _ => class.to_string(),
    };
    self.set_attr(node, "class", &value);
  }

  pub fn remove_class(&mut self, node: NodeId, class: &str) {
    if !self.has_class(node, class) {
      return;
    }
    let value = self
      .attr(node, "class")
      .unwrap_or_default()
      .split_ascii_whitespace()
      .filter(|c| *c != class)
      .collect::<Vec<_>>()
      .join(" ");
    self.set_attr(node, "class", &value);
  }

  /// Toggle `class` and return whether it is present afterwards.
  pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
    if self.has_class(node, class) {
      self.remove_class(node, class);
      false
    } else {
      self.add_class(node, class);
      self.has_class(node, class)
    }
  }

  // -- inline style --

  pub fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
    let style = self.attr(node, "style")?;
    style.split(';').find_map(|decl| {
      let (name, value) = decl.split_once(':')?;
      (name.trim() == property).then(|| value.trim().to_string())
    })
  }

  /// Set (`Some`) or clear (`None`) one declaration of the inline style,
  /// keeping the others. An emptied style attribute is removed.
  pub fn set_style_property(&mut self, node: NodeId, property: &str, value: Option<&str>) {
    let Some(el) = self.element(node) else {
      return;
    };
    let mut decls: Vec<(String, String)> = el
      .attr("style")
      .unwrap_or_default()
      .split(';')
      .filter_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        Some((name.trim().to_string(), value.trim().to_string()))
      })
      .filter(|(name, _)| name != property)
      .collect();
    if let Some(value) = value {
      decls.push((property.to_string(), value.to_string()));
    }
    if decls.is_empty() {
      self.remove_attr(node, "style");
    } else {
      let style = decls.iter().map(|(n, v)| format!("{n}: {v};")).collect::<Vec<_>>().join(" ");
      self.set_attr(node, "style", &style);
    }
  }

  // -- dataset --

  pub fn dataset_get(&self, node: NodeId, name: &str) -> Option<&str> {
    self.attr(node, &dataset_attr_name(name))
  }

  pub fn dataset_set(&mut self, node: NodeId, name: &str, value: &str) {
    self.set_attr(node, &dataset_attr_name(name), value);
  }

  // -- text --

  pub fn text_content(&self, node: NodeId) -> String {
    match self.data(node) {
      Some(NodeData::Text(t)) => t.clone(),
      Some(NodeData::Element(_) | NodeData::Document) => {
        let mut out = String::new();
        for id in self.descendants(node) {
          if let Some(NodeData::Text(t)) = self.data(id) {
            out.push_str(t);
          }
        }
        out
      }
      _ => String::new(),
    }
  }

  /// Replace all children of an element with a single text node (or none
  /// when `text` is empty). A lone text child is rewritten in place.
  pub fn set_text_content(&mut self, node: NodeId, text: &str) {
    let Some(ordinal) = self.ordinal(node) else {
      return;
    };
    let lone_text = match self.children(node) {
      [] if text.is_empty() => return,
      [only] => match &self.nodes[only.0].data {
        NodeData::Text(t) if t == text => return,
        NodeData::Text(_) => Some(*only),
        _ => None,
      },
      _ => None,
    };
    match lone_text {
      Some(child) if !text.is_empty() => {
        self.nodes[child.0].data = NodeData::Text(text.to_string());
      }
      _ => {
        let old = std::mem::take(&mut self.nodes[node.0].children);
        for child in old {
          self.detach(child);
        }
        if !text.is_empty() {
          let id = self.alloc_text(node, text);
          self.nodes[node.0].children.push(id);
        }
      }
    }
    self.mutations.push(Mutation::SetText { node: ordinal, text: text.to_string() });
  }

  /// Unlink `child`. Detached text slots are recycled; detached elements
  /// keep their slot so ids held elsewhere never alias.
  fn detach(&mut self, child: NodeId) {
    self.nodes[child.0].parent = None;
    if matches!(self.nodes[child.0].data, NodeData::Text(_)) {
      self.nodes[child.0].data = NodeData::Text(String::new());
      self.free_text.push(child);
    }
  }

  fn alloc_text(&mut self, parent: NodeId, text: &str) -> NodeId {
    let data = NodeData::Text(text.to_string());
    match self.free_text.pop() {
      Some(id) => {
        self.nodes[id.0] = Node::new(data, Some(parent));
        id
      }
      None => {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data, Some(parent)));
        id
      }
    }
  }

  // -- selectors --

  pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
    selector.matches(self, node)
  }

  pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
    self.query_selector_within(self.root(), selector)
  }

  pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
    self.query_selector_all_within(self.root(), selector)
  }

  pub fn query_selector_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
    self.descendants(scope).into_iter().find(|&id| selector.matches(self, id))
  }

  pub fn query_selector_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
    self.descendants(scope).into_iter().filter(|&id| selector.matches(self, id)).collect()
  }

  /// Nearest inclusive ancestor element matching `selector`.
  pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
    let mut current = Some(node);
    while let Some(id) = current {
      if selector.matches(self, id) {
        return Some(id);
      }
      current = self.parent_element(id);
    }
    None
  }

  // -- mutation log --

  pub fn mutations(&self) -> &[Mutation] {
    &self.mutations
  }

  pub fn take_mutations(&mut self) -> Vec<Mutation> {
    std::mem::take(&mut self.mutations)
  }

  // -- serialization --

  pub fn serialize(&self) -> String {
    let mut out = String::new();
    for &child in self.children(self.root()) {
      self.serialize_node(child, &mut out);
    }
    out
  }

  pub fn outer_html(&self, node: NodeId) -> String {
    let mut out = String::new();
    self.serialize_node(node, &mut out);
    out
  }

  fn serialize_node(&self, node: NodeId, out: &mut String) {
    match self.data(node) {
      Some(NodeData::Element(el)) => {
        out.push('<');
        out.push_str(&el.tag);
        for (name, value) in &el.attrs {
          out.push(' ');
          out.push_str(name);
          out.push_str("=\"");
          out.push_str(&escape_attr(value));
          out.push('"');
        }
        out.push('>');
        if is_void_element(&el.tag) {
          return;
        }
        let raw = is_raw_text_element(&el.tag);
        for &child in self.children(node) {
          match self.data(child) {
            Some(NodeData::Text(t)) if raw => out.push_str(t),
            _ => self.serialize_node(child, out),
          }
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
      }
      Some(NodeData::Text(t)) => out.push_str(&escape_text(t)),
      Some(NodeData::Comment(c)) => {
        out.push_str("<!--");
        out.push_str(c);
        out.push_str("-->");
      }
      Some(NodeData::Doctype(d)) => {
        out.push_str("<!");
        out.push_str(d);
        out.push('>');
      }
      Some(NodeData::Document) => {
        for &child in self.children(node) {
          self.serialize_node(child, out);
        }
      }
      None => {}
    }
  }
}
