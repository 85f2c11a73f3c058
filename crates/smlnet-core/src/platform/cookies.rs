use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::platform::{Clock, SystemClock};

/// `SameSite` cookie policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes attached to a cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    /// URL path scope of the cookie.
    pub path: String,
    pub same_site: SameSite,
    /// Lifetime from the moment of the write. `None` means a session
    /// cookie.
    pub max_age: Option<Duration>,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            path: "/".to_owned(),
            same_site: SameSite::Lax,
            max_age: None,
        }
    }
}

impl CookieAttributes {
    /// Max age in whole seconds, the unit the `Max-Age` attribute uses.
    pub fn max_age_secs(&self) -> Option<i64> {
        self.max_age.map(|age| age.num_seconds())
    }
}

/// Render a `document.cookie` assignment string, e.g.
/// `name=value; Path=/; SameSite=Lax; Max-Age=31536000`.
pub fn format_set_cookie(name: &str, value: &str, attrs: &CookieAttributes) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; SameSite={}",
        name,
        value,
        attrs.path,
        attrs.same_site.as_str()
    );
    if let Some(secs) = attrs.max_age_secs() {
        cookie.push_str(&format!("; Max-Age={secs}"));
    }
    cookie
}

/// Cookie jar platform trait: named string cookies with write attributes.
///
/// Values travel as-is; escaping is the codec's responsibility. A jar
/// that cannot persist (cookies blocked, no document) reads `None` and
/// drops writes, the same degradation contract as
/// [`KeyValueStorage`](crate::platform::KeyValueStorage).
pub trait CookieJar {
    /// Current value of the named cookie, if present and unexpired.
    fn get(&self, name: &str) -> Option<String>;

    /// Write a cookie.
    fn set(&mut self, name: &str, value: &str, attrs: &CookieAttributes);

    /// Delete a cookie by name.
    fn remove(&mut self, name: &str);
}

/// Lets a host keep ownership of a jar and lend it to a short-lived
/// store, one page load at a time.
impl<J: CookieJar + ?Sized> CookieJar for &mut J {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str, attrs: &CookieAttributes) {
        (**self).set(name, value, attrs)
    }

    fn remove(&mut self, name: &str) {
        (**self).remove(name)
    }
}

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

/// In-memory cookie jar that honors `max_age` through its clock, so
/// expiry behaves like a real browser jar: an expired cookie reads as
/// absent.
#[derive(Debug, Clone)]
pub struct MemoryCookieJar<C: Clock = SystemClock> {
    cookies: HashMap<String, StoredCookie>,
    clock: C,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryCookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryCookieJar<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            cookies: HashMap::new(),
            clock,
        }
    }
}

impl<C: Clock> CookieJar for MemoryCookieJar<C> {
    fn get(&self, name: &str) -> Option<String> {
        let cookie = self.cookies.get(name)?;
        if let Some(expires_at) = cookie.expires_at {
            if self.clock.now() >= expires_at {
                return None;
            }
        }
        Some(cookie.value.clone())
    }

    fn set(&mut self, name: &str, value: &str, attrs: &CookieAttributes) {
        let expires_at = attrs.max_age.map(|age| self.clock.now() + age);
        self.cookies.insert(
            name.to_owned(),
            StoredCookie {
                value: value.to_owned(),
                expires_at,
            },
        );
    }

    fn remove(&mut self, name: &str) {
        self.cookies.remove(name);
    }
}
