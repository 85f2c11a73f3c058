//! Bilingual text and the persisted language preference.

pub mod language;
pub mod store;
pub mod text;

pub use language::Language;
pub use store::{LanguageStore, Subscription, LANGUAGE_KEY};
pub use text::BilingualText;
