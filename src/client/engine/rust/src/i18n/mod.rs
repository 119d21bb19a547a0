/* src/client/engine/rust/src/i18n/mod.rs */

mod dictionary;
mod locale;
pub mod marker;
mod resolve;
mod scanner;
mod session;

pub use dictionary::{Dictionary, DictionaryStore};
pub use locale::Locale;
pub use marker::{MarkerKind, MarkerPair, MarkerSpec, SkipReason, SkippedPair};
pub use resolve::{ResolveContext, resolve_initial_locale};
pub use scanner::{ScanReport, Scanner, kicker_phrases};
pub use session::LocaleSession;
