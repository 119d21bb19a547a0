/* src/client/dom/rust/src/parser.rs */

use crate::escape::decode_entities;
use crate::node::{Element, Node, NodeData, NodeId, is_raw_text_element, is_void_element};

/// Builds the node arena while the parser walks the input.
/// Slot 0 is always the document node.
struct TreeBuilder {
  nodes: Vec<Node>,
  open: Vec<NodeId>,
  next_ordinal: u32,
}

impl TreeBuilder {
  fn new() -> Self {
    Self { nodes: vec![Node::new(NodeData::Document, None)], open: Vec::new(), next_ordinal: 0 }
  }

  fn current(&self) -> NodeId {
    self.open.last().copied().unwrap_or(NodeId(0))
  }

  fn append(&mut self, data: NodeData) -> NodeId {
    let parent = self.current();
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node::new(data, Some(parent)));
    self.nodes[parent.0].children.push(id);
    id
  }

  fn element(&mut self, tag: String, attrs: Vec<(String, String)>) -> NodeId {
    let ordinal = self.next_ordinal;
    self.next_ordinal += 1;
    self.append(NodeData::Element(Element { tag, attrs, ordinal }))
  }

  fn text(&mut self, raw: &str, decode: bool) {
    if raw.is_empty() {
      return;
    }
    let text = if decode { decode_entities(raw) } else { raw.to_string() };
    self.append(NodeData::Text(text));
  }

  /// Pop open elements up to and including the nearest `tag`.
  /// A closing tag with no open counterpart is dropped.
  fn close(&mut self, tag: &str) {
    let found = self.open.iter().rposition(
      |id| matches!(&self.nodes[id.0].data, NodeData::Element(e) if e.tag == tag),
    );
    if let Some(pos) = found {
      self.open.truncate(pos);
    }
  }
}

struct OpenTag {
  tag: String,
  attrs: Vec<(String, String)>,
  self_closing: bool,
  end: usize,
}

/// Parse an HTML document into a node arena. Never fails: malformed input is
/// recovered the way a browser would for the common cases (unknown closing
/// tags are ignored, open elements are closed at end of input).
pub(crate) fn parse(html: &str) -> Vec<Node> {
  let mut builder = TreeBuilder::new();
  let bytes = html.as_bytes();
  let mut pos = 0;

  while pos < bytes.len() {
    if bytes[pos] != b'<' {
      let end = html[pos..].find('<').map_or(html.len(), |i| pos + i);
      builder.text(&html[pos..end], true);
      pos = end;
      continue;
    }

    let rest = &html[pos..];

    if let Some(body) = rest.strip_prefix("<!--") {
      let (content, next) = match body.find("-->") {
        Some(i) => (&body[..i], pos + 4 + i + 3),
        None => (body, html.len()),
      };
      builder.append(NodeData::Comment(content.to_string()));
      pos = next;
      continue;
    }

    if rest.starts_with("<!") {
      let (content, next) = match rest.find('>') {
        Some(i) => (&rest[2..i], pos + i + 1),
        None => (&rest[2..], html.len()),
      };
      builder.append(NodeData::Doctype(content.to_string()));
      pos = next;
      continue;
    }

    if let Some(after) = rest.strip_prefix("</") {
      let (name, next) = match after.find('>') {
        Some(i) => (&after[..i], pos + 2 + i + 1),
        None => (after, html.len()),
      };
      builder.close(&name.trim().to_ascii_lowercase());
      pos = next;
      continue;
    }

    let starts_tag = bytes.get(pos + 1).is_some_and(u8::is_ascii_alphabetic);
    if !starts_tag {
      // Lone '<' in text
      builder.text("<", false);
      pos += 1;
      continue;
    }

    let open = parse_open_tag(html, pos);
    let id = builder.element(open.tag.clone(), open.attrs);
    pos = open.end;

    if open.self_closing || is_void_element(&open.tag) {
      continue;
    }

    if is_raw_text_element(&open.tag) {
      let closing = format!("</{}", open.tag);
      let body_end = html[pos..].to_ascii_lowercase().find(&closing).map_or(html.len(), |i| pos + i);
      builder.open.push(id);
      builder.text(&html[pos..body_end], false);
      builder.open.pop();
      pos = match html[body_end..].find('>') {
        Some(i) => body_end + i + 1,
        None => html.len(),
      };
      continue;
    }

    builder.open.push(id);
  }

  builder.nodes
}

fn is_name_end(b: u8) -> bool {
  b.is_ascii_whitespace() || b == b'>' || b == b'/' || b == b'='
}

/// Parse `<tag attr="v" ...>` starting at the '<'. Unterminated tags consume
/// the remaining input.
fn parse_open_tag(html: &str, start: usize) -> OpenTag {
  let bytes = html.as_bytes();
  let mut i = start + 1;
  while i < bytes.len() && !is_name_end(bytes[i]) {
    i += 1;
  }
  let tag = html[start + 1..i].to_ascii_lowercase();
  let mut attrs: Vec<(String, String)> = Vec::new();

  loop {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    if i >= bytes.len() {
      return OpenTag { tag, attrs, self_closing: false, end: bytes.len() };
    }
    match bytes[i] {
      b'>' => return OpenTag { tag, attrs, self_closing: false, end: i + 1 },
      b'/' if bytes.get(i + 1) == Some(&b'>') => {
        return OpenTag { tag, attrs, self_closing: true, end: i + 2 };
      }
      b'/' | b'=' => {
        i += 1;
        continue;
      }
      _ => {}
    }

    let name_start = i;
    while i < bytes.len() && !is_name_end(bytes[i]) {
      i += 1;
    }
    let name = html[name_start..i].to_ascii_lowercase();

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
      i += 1;
    }
    let mut value = String::new();
    if bytes.get(i) == Some(&b'=') {
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
      }
      match bytes.get(i) {
        Some(&q) if q == b'"' || q == b'\'' => {
          let value_start = i + 1;
          let value_end = html[value_start..].find(q as char).map_or(bytes.len(), |n| value_start + n);
          value = decode_entities(&html[value_start..value_end]);
          i = (value_end + 1).min(bytes.len());
        }
        _ => {
          let value_start = i;
          while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
            i += 1;
          }
          value = decode_entities(&html[value_start..i]);
        }
      }
    }

    // First occurrence wins, as in browsers
    if !attrs.iter().any(|(n, _)| *n == name) {
      attrs.push((name, value));
    }
  }
}
