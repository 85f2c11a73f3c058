//! Core state stores for the SMLnet website: cookie consent and language
//! preference, plus the platform seams they persist through.
//!
//! Nothing in this crate touches a browser API directly. Hosts provide
//! implementations of [`platform::CookieJar`], [`platform::KeyValueStorage`]
//! and [`platform::Clock`]; the stores supply the semantics on top (wire
//! format, fallback ladders, retention). The in-memory implementations in
//! [`platform`] back tests and simulated visitor sessions.

pub mod consent;
pub mod error;
pub mod i18n;
pub mod platform;
pub mod uri;

pub use error::CoreError;
