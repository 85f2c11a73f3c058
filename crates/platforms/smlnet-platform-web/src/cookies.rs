use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use smlnet_core::platform::{format_set_cookie, CookieAttributes, CookieJar};

/// Cookie jar over `document.cookie`.
///
/// Reads scan the semicolon-separated cookie string; writes assign a
/// Set-Cookie-shaped string back. Expiry is the browser's concern, the
/// jar only forwards the attributes it was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCookieJar;

fn document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

impl CookieJar for BrowserCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let cookies = document()?.cookie().ok()?;
        cookies
            .split("; ")
            .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
            .map(str::to_owned)
    }

    fn set(&mut self, name: &str, value: &str, attrs: &CookieAttributes) {
        if let Some(document) = document() {
            let _ = document.set_cookie(&format_set_cookie(name, value, attrs));
        }
    }

    fn remove(&mut self, name: &str) {
        if let Some(document) = document() {
            let _ = document.set_cookie(&format!("{name}=; Path=/; Max-Age=0"));
        }
    }
}
