/* src/client/dom/rust/src/lib.rs */

mod document;
mod escape;
mod mutation;
mod node;
mod parser;
mod selector;

pub use document::{Document, dataset_attr_name};
pub use mutation::Mutation;
pub use node::{Element, NodeData, NodeId};
pub use selector::{Selector, SelectorError};
