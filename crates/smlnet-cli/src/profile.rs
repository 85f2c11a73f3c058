use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smlnet_core::platform::{CookieAttributes, CookieJar, KeyValueStorage};

/// A visitor profile on disk: the cookies and local storage one browser
/// would hold, so consecutive invocations behave like consecutive page
/// loads in the same browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    cookies: HashMap<String, ProfileCookie>,
    #[serde(default)]
    storage: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileCookie {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Read a profile file. A missing file is a fresh visitor; an
    /// unreadable or malformed one is treated the same way, as a browser
    /// treats a bad cookie store.
    pub fn load(path: &Path) -> Profile {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Profile::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable profile, starting fresh");
                return Profile::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed profile, starting fresh");
                Profile::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl CookieJar for Profile {
    fn get(&self, name: &str) -> Option<String> {
        let cookie = self.cookies.get(name)?;
        if let Some(expires_at) = cookie.expires_at {
            if Utc::now() >= expires_at {
                return None;
            }
        }
        Some(cookie.value.clone())
    }

    fn set(&mut self, name: &str, value: &str, attrs: &CookieAttributes) {
        let expires_at = attrs.max_age.map(|age| Utc::now() + age);
        self.cookies.insert(
            name.to_owned(),
            ProfileCookie {
                value: value.to_owned(),
                expires_at,
            },
        );
    }

    fn remove(&mut self, name: &str) {
        self.cookies.remove(name);
    }
}

impl KeyValueStorage for Profile {
    fn save(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_owned(), value.to_owned());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.storage.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn missing_file_is_a_fresh_visitor() {
        let dir = tempfile::tempdir().unwrap();
        let profile = Profile::load(&dir.path().join("profile.json"));
        assert!(profile.cookies.is_empty());
        assert!(profile.storage.is_empty());
    }

    #[test]
    fn malformed_file_is_a_fresh_visitor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ nope").unwrap();
        let profile = Profile::load(&path);
        assert!(profile.cookies.is_empty());
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let mut profile = Profile::default();
        CookieJar::set(
            &mut profile,
            "smlnet_consent",
            "value",
            &CookieAttributes::default(),
        );
        KeyValueStorage::save(&mut profile, "smlnet-lang", "nl");
        profile.save(&path).unwrap();

        let reloaded = Profile::load(&path);
        assert_eq!(CookieJar::get(&reloaded, "smlnet_consent").as_deref(), Some("value"));
        assert_eq!(
            KeyValueStorage::load(&reloaded, "smlnet-lang").as_deref(),
            Some("nl")
        );
    }

    #[test]
    fn expired_cookie_reads_as_absent() {
        let mut profile = Profile::default();
        profile.cookies.insert(
            "smlnet_consent".to_owned(),
            ProfileCookie {
                value: "stale".to_owned(),
                expires_at: Some(Utc::now() - Duration::days(1)),
            },
        );
        assert_eq!(CookieJar::get(&profile, "smlnet_consent"), None);
    }

    #[test]
    fn cookie_without_expiry_never_lapses() {
        let mut profile = Profile::default();
        CookieJar::set(
            &mut profile,
            "session",
            "v",
            &CookieAttributes::default(),
        );
        assert_eq!(CookieJar::get(&profile, "session").as_deref(), Some("v"));
    }
}
