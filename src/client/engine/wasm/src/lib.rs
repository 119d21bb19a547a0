/* src/client/engine/wasm/src/lib.rs */

//! Browser bindings for the folio page engine.
//!
//! Diagnostics go through `tracing`. This crate never installs a
//! subscriber; without one the events are dropped. A host that wants them
//! in the console must set a global subscriber before constructing a
//! `FolioPage`. `wasm_start` only installs the panic hook.

pub mod runner;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use runner::{BootOptions, Runner};

#[cfg(target_arch = "wasm32")]
pub use wasm::FolioPage;
