use smlnet_core::i18n::BilingualText;

use crate::catalog;

/// Client-side pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Pricing,
    Contact,
    CookiePolicy,
    PrivacyPolicy,
    NotFound,
}

impl Route {
    /// The routable pages in navigation order. `NotFound` is only
    /// reachable by falling through [`from_path`](Route::from_path).
    pub const PAGES: [Route; 6] = [
        Route::Home,
        Route::Services,
        Route::Pricing,
        Route::Contact,
        Route::CookiePolicy,
        Route::PrivacyPolicy,
    ];

    /// Route pattern for this page. Pages have literal paths; `NotFound`
    /// is the catch-all.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Pricing => "/pricing",
            Route::Contact => "/contact",
            Route::CookiePolicy => "/cookie-policy",
            Route::PrivacyPolicy => "/privacy-policy",
            Route::NotFound => "*",
        }
    }

    /// Resolve a requested path. A trailing slash is tolerated; anything
    /// unknown lands on `NotFound` rather than failing.
    pub fn from_path(path: &str) -> Route {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" => Route::Home,
            "/services" => Route::Services,
            "/pricing" => Route::Pricing,
            "/contact" => Route::Contact,
            "/cookie-policy" => Route::CookiePolicy,
            "/privacy-policy" => Route::PrivacyPolicy,
            _ => Route::NotFound,
        }
    }

    /// Localized page title.
    pub fn title(&self) -> &'static BilingualText {
        match self {
            Route::Home => &catalog::nav::HOME,
            Route::Services => &catalog::nav::SERVICES,
            Route::Pricing => &catalog::pricing::LABEL,
            Route::Contact => &catalog::nav::CONTACT,
            Route::CookiePolicy => &catalog::legal::COOKIE_POLICY_TITLE,
            Route::PrivacyPolicy => &catalog::legal::PRIVACY_POLICY_TITLE,
            Route::NotFound => &catalog::not_found::TITLE,
        }
    }
}
