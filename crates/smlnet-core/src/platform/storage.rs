use std::collections::HashMap;

/// Key-value storage platform trait.
///
/// The platform interface stores raw strings. Serialization is the
/// caller's responsibility, not the platform's, which keeps the contract
/// free of any encoding dependency.
///
/// An unavailable backend (storage disabled, private browsing) reads
/// `None` and silently drops writes. The stores built on top treat both
/// as "nothing persisted yet".
///
/// Implementations: browser localStorage, the visitor-profile file, the
/// in-memory store below.
pub trait KeyValueStorage {
    /// Write a string value under key.
    fn save(&mut self, key: &str, value: &str);

    /// Read a string value by key. Returns None if not found.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a key from storage.
    fn remove(&mut self, key: &str);
}

/// Lets a host keep ownership of its storage and lend it to a
/// short-lived store.
impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn save(&mut self, key: &str, value: &str) {
        (**self).save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory storage for tests and simulated sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
