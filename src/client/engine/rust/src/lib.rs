/* src/client/engine/rust/src/lib.rs */

pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod i18n;
pub mod page;
pub mod scheduler;
pub mod storage;
pub mod widgets;

// Re-exports for ergonomic use
pub use config::PageConfig;
pub use env::Environment;
pub use error::{ConfigError, EngineError};
pub use events::{Action, DomEvent, EventKind, EventRouter, Hit, Listener, Matcher, Route};
pub use i18n::{Dictionary, DictionaryStore, Locale, LocaleSession, ScanReport, Scanner};
pub use page::Page;
pub use scheduler::{Scheduler, Task, TaskHandle};
pub use storage::{MemoryStorage, Storage};
pub use widgets::WidgetKind;

#[cfg(test)]
mod tests;
