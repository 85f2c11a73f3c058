//! Browser backends for the platform traits.
//!
//! `BrowserCookieJar` sits on `document.cookie` and `BrowserStorage` on
//! `window.localStorage`. Both degrade to "nothing stored" whenever the
//! browser refuses access, so the stores built on top behave the same
//! in a sandboxed iframe as in a first-party page.
//!
//! The whole crate is a no-op off wasm32; native builds (the CLI, the
//! test suites) use the in-memory backends from `smlnet-core` instead.

#[cfg(target_arch = "wasm32")]
mod cookies;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
pub use cookies::BrowserCookieJar;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
