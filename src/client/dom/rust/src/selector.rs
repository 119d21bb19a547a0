/* src/client/dom/rust/src/selector.rs */

//! A small CSS selector subset: type, `#id`, `.class`, `[attr]`,
//! `[attr=value]`, compound selectors, descendant and child combinators,
//! and comma-separated groups.

use std::fmt;

use thiserror::Error;

use crate::document::Document;
use crate::node::{Element, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
  #[error("empty selector")]
  Empty,
  #[error("unexpected '{ch}' at offset {pos}")]
  UnexpectedChar { ch: char, pos: usize },
  #[error("expected a name at offset {pos}")]
  MissingName { pos: usize },
  #[error("unterminated attribute selector starting at offset {pos}")]
  UnterminatedAttribute { pos: usize },
  #[error("dangling combinator at offset {pos}")]
  DanglingCombinator { pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
  Exists(String),
  Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
  tag: Option<String>,
  id: Option<String>,
  classes: Vec<String>,
  attrs: Vec<AttrTest>,
}

impl Compound {
  fn is_empty(&self) -> bool {
    self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty()
  }

  fn matches(&self, el: &Element) -> bool {
    if let Some(ref tag) = self.tag {
      if tag != "*" && el.tag() != tag {
        return false;
      }
    }
    if let Some(ref id) = self.id {
      if el.attr("id") != Some(id.as_str()) {
        return false;
      }
    }
    if !self.classes.iter().all(|c| el.has_class(c)) {
      return false;
    }
    self.attrs.iter().all(|test| match test {
      AttrTest::Exists(name) => el.attr(name).is_some(),
      AttrTest::Equals(name, value) => el.attr(name) == Some(value.as_str()),
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
  Descendant,
  Child,
}

/// One comma-free alternative: `steps[i]` is related to `steps[i + 1]` by
/// `combinators[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
  steps: Vec<Compound>,
  combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
  source: String,
  alternatives: Vec<Complex>,
}

impl fmt::Display for Selector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.source)
  }
}

fn is_ident_char(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '-' || ch == '_'
}

struct Cursor<'a> {
  src: &'a str,
  pos: usize,
}

impl<'a> Cursor<'a> {
  fn peek(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  fn bump(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.pos += ch.len_utf8();
    Some(ch)
  }

  fn skip_ws(&mut self) -> bool {
    let start = self.pos;
    while self.peek().is_some_and(char::is_whitespace) {
      self.bump();
    }
    self.pos > start
  }

  fn ident(&mut self) -> Result<&'a str, SelectorError> {
    let start = self.pos;
    while self.peek().is_some_and(is_ident_char) {
      self.bump();
    }
    if self.pos == start {
      return Err(SelectorError::MissingName { pos: start });
    }
    Ok(&self.src[start..self.pos])
  }

  fn attr_test(&mut self) -> Result<AttrTest, SelectorError> {
    let open = self.pos - 1;
    self.skip_ws();
    let name = self.ident()?.to_ascii_lowercase();
    self.skip_ws();
    match self.bump() {
      Some(']') => Ok(AttrTest::Exists(name)),
      Some('=') => {
        self.skip_ws();
        let value = match self.peek() {
          Some(q @ ('"' | '\'')) => {
            self.bump();
            let start = self.pos;
            let len = self.src[start..]
              .find(q)
              .ok_or(SelectorError::UnterminatedAttribute { pos: open })?;
            self.pos = start + len + 1;
            self.src[start..start + len].to_string()
          }
          _ => self.ident()?.to_string(),
        };
        self.skip_ws();
        match self.bump() {
          Some(']') => Ok(AttrTest::Equals(name, value)),
          _ => Err(SelectorError::UnterminatedAttribute { pos: open }),
        }
      }
      _ => Err(SelectorError::UnterminatedAttribute { pos: open }),
    }
  }

  fn compound(&mut self) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    if self.peek() == Some('*') {
      self.bump();
      compound.tag = Some("*".into());
    } else if self.peek().is_some_and(is_ident_char) {
      compound.tag = Some(self.ident()?.to_ascii_lowercase());
    }
    loop {
      match self.peek() {
        Some('#') => {
          self.bump();
          compound.id = Some(self.ident()?.to_string());
        }
        Some('.') => {
          self.bump();
          compound.classes.push(self.ident()?.to_string());
        }
        Some('[') => {
          self.bump();
          compound.attrs.push(self.attr_test()?);
        }
        _ => return Ok(compound),
      }
    }
  }
}

impl Selector {
  pub fn parse(source: &str) -> Result<Self, SelectorError> {
    let mut cur = Cursor { src: source, pos: 0 };
    let mut alternatives = Vec::new();
    let mut current = Complex { steps: Vec::new(), combinators: Vec::new() };
    let mut pending: Option<Combinator> = None;

    cur.skip_ws();
    loop {
      let start = cur.pos;
      let compound = cur.compound()?;
      if compound.is_empty() {
        match cur.peek() {
          None if current.steps.is_empty() && alternatives.is_empty() => {
            return Err(SelectorError::Empty);
          }
          None => return Err(SelectorError::DanglingCombinator { pos: start }),
          Some(ch) => return Err(SelectorError::UnexpectedChar { ch, pos: start }),
        }
      }
      if let Some(comb) = pending.take() {
        current.combinators.push(comb);
      }
      current.steps.push(compound);

      let had_ws = cur.skip_ws();
      match cur.peek() {
        None => break,
        Some(',') => {
          cur.bump();
          cur.skip_ws();
          alternatives.push(std::mem::replace(
            &mut current,
            Complex { steps: Vec::new(), combinators: Vec::new() },
          ));
        }
        Some('>') => {
          cur.bump();
          cur.skip_ws();
          pending = Some(Combinator::Child);
        }
        Some(_) if had_ws => pending = Some(Combinator::Descendant),
        Some(ch) => return Err(SelectorError::UnexpectedChar { ch, pos: cur.pos }),
      }
    }
    alternatives.push(current);

    Ok(Self { source: source.trim().to_string(), alternatives })
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// Whether the element at `node` matches any alternative.
  pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
    self.alternatives.iter().any(|alt| match_step(doc, node, alt, alt.steps.len() - 1))
  }
}

fn match_step(doc: &Document, node: NodeId, complex: &Complex, idx: usize) -> bool {
  let Some(el) = doc.element(node) else {
    return false;
  };
  if !complex.steps[idx].matches(el) {
    return false;
  }
  if idx == 0 {
    return true;
  }
  match complex.combinators[idx - 1] {
    Combinator::Child => {
      doc.parent_element(node).is_some_and(|p| match_step(doc, p, complex, idx - 1))
    }
    Combinator::Descendant => {
      let mut ancestor = doc.parent_element(node);
      while let Some(a) = ancestor {
        if match_step(doc, a, complex, idx - 1) {
          return true;
        }
        ancestor = doc.parent_element(a);
      }
      false
    }
  }
}
