//! Legal documents, embedded at compile time.
//!
//! The cookie and privacy policies ship inside the binary as Markdown,
//! one file per language. Lookup falls back to English when a
//! translation is missing, the same rule the catalog applies to single
//! strings.

use include_dir::{include_dir, Dir};

use smlnet_core::i18n::Language;

use crate::routes::Route;

static CONTENT: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/content");

/// The Markdown source of the legal page behind `route`, or `None` when
/// the route is not a legal page.
pub fn document(route: Route, language: Language) -> Option<&'static str> {
    let slug = match route {
        Route::CookiePolicy => "cookie-policy",
        Route::PrivacyPolicy => "privacy-policy",
        _ => return None,
    };
    lookup(slug, language).or_else(|| lookup(slug, Language::DEFAULT))
}

fn lookup(slug: &str, language: Language) -> Option<&'static str> {
    CONTENT
        .get_file(format!("{slug}.{}.md", language.as_str()))
        .and_then(|file| file.contents_utf8())
}
