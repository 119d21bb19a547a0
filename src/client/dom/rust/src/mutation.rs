/* src/client/dom/rust/src/mutation.rs */

use serde::Serialize;

/// A single observable write to the document, addressed by element ordinal.
///
/// Hosts that mirror the model onto a live page replay these in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
  SetText { node: u32, text: String },
  SetAttr { node: u32, name: String, value: String },
  RemoveAttr { node: u32, name: String },
}

impl Mutation {
  pub fn node(&self) -> u32 {
    match self {
      Self::SetText { node, .. } | Self::SetAttr { node, .. } | Self::RemoveAttr { node, .. } => {
        *node
      }
    }
  }
}
