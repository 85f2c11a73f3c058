use crate::i18n::{BilingualText, Language};
use crate::platform::KeyValueStorage;

/// Storage key for the saved language preference.
pub const LANGUAGE_KEY: &str = "smlnet-lang";

/// Handle for removing a language-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// The active language over key-value storage.
///
/// Owns the storage it persists through and the list of change
/// subscribers. There are no ambient globals: anything that wants to
/// react to a language switch subscribes here, and callbacks run
/// synchronously inside [`set_language`](LanguageStore::set_language).
pub struct LanguageStore<S: KeyValueStorage> {
    storage: S,
    active: Language,
    subscribers: Vec<(u64, Box<dyn FnMut(Language)>)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> LanguageStore<S> {
    /// Load the saved preference. Anything but an exact language code,
    /// including nothing at all, starts the store at the default.
    pub fn load(storage: S) -> Self {
        let active = storage
            .load(LANGUAGE_KEY)
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(Language::DEFAULT);
        Self {
            storage,
            active,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    /// Switch the active language. The choice is persisted either way;
    /// subscribers only run when the language actually changed.
    pub fn set_language(&mut self, language: Language) {
        self.storage.save(LANGUAGE_KEY, language.as_str());
        if self.active == language {
            return;
        }
        self.active = language;
        tracing::debug!(%language, "language switched");
        for (_, notify) in &mut self.subscribers {
            notify(language);
        }
    }

    /// Resolve a catalog entry for the active language, falling back to
    /// the default language and then `""`.
    pub fn translate(&self, text: &BilingualText) -> &'static str {
        text.resolve(self.active)
    }

    /// Register a change callback. It runs synchronously inside
    /// [`set_language`](LanguageStore::set_language), in subscription
    /// order.
    pub fn subscribe(&mut self, notify: impl FnMut(Language) + 'static) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(notify)));
        Subscription(id)
    }

    /// Drop a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_storage_defaults_to_english() {
        let store = LanguageStore::load(MemoryStorage::new());
        assert_eq!(store.active(), Language::En);
    }

    #[test]
    fn saved_preference_is_restored() {
        let mut storage = MemoryStorage::new();
        storage.save(LANGUAGE_KEY, "nl");
        let store = LanguageStore::load(storage);
        assert_eq!(store.active(), Language::Nl);
    }

    #[test]
    fn unrecognized_saved_value_defaults_silently() {
        for bad in ["fr", "NL", "dutch", ""] {
            let mut storage = MemoryStorage::new();
            storage.save(LANGUAGE_KEY, bad);
            let store = LanguageStore::load(storage);
            assert_eq!(store.active(), Language::En, "value {bad:?}");
        }
    }

    #[test]
    fn set_language_persists_under_the_single_key() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        store.set_language(Language::Nl);
        assert_eq!(store.active(), Language::Nl);
        assert_eq!(store.storage.load(LANGUAGE_KEY).as_deref(), Some("nl"));
    }

    #[test]
    fn preference_survives_a_reload() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        store.set_language(Language::Nl);
        let LanguageStore { storage, .. } = store;
        let reloaded = LanguageStore::load(storage);
        assert_eq!(reloaded.active(), Language::Nl);
    }

    #[test]
    fn translate_uses_the_active_language() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        let greeting = BilingualText::pair("Hello", "Hallo");
        assert_eq!(store.translate(&greeting), "Hello");
        store.set_language(Language::Nl);
        assert_eq!(store.translate(&greeting), "Hallo");
    }

    #[test]
    fn translate_falls_back_for_partial_entries() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        store.set_language(Language::Nl);
        assert_eq!(store.translate(&BilingualText::english("Hello")), "Hello");
        assert_eq!(store.translate(&BilingualText::empty()), "");
    }

    #[test]
    fn subscribers_see_actual_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = LanguageStore::load(MemoryStorage::new());

        let sink = Rc::clone(&seen);
        store.subscribe(move |language| sink.borrow_mut().push(language));

        store.set_language(Language::En); // already active, no callback
        store.set_language(Language::Nl);
        store.set_language(Language::Nl); // unchanged, no callback
        store.set_language(Language::En);

        assert_eq!(*seen.borrow(), vec![Language::Nl, Language::En]);
    }

    #[test]
    fn repeated_set_still_persists() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        store.storage.remove(LANGUAGE_KEY);
        store.set_language(Language::En); // no change, but still saved
        assert_eq!(store.storage.load(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = LanguageStore::load(MemoryStorage::new());

        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |language| sink.borrow_mut().push(language));
        store.set_language(Language::Nl);
        store.unsubscribe(subscription);
        store.set_language(Language::En);

        assert_eq!(*seen.borrow(), vec![Language::Nl]);
    }

    #[test]
    fn unsubscribing_twice_is_harmless() {
        let mut store = LanguageStore::load(MemoryStorage::new());
        let subscription = store.subscribe(|_| {});
        store.unsubscribe(subscription);
        store.unsubscribe(subscription);
    }
}
