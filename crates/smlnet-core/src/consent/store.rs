use crate::consent::{cookie, ConsentCategory, ConsentChoice, ConsentRecord};
use crate::platform::{Clock, CookieJar, SystemClock};

/// Consent decisions over a cookie jar.
///
/// All state lives in the single consent cookie; the store itself holds
/// nothing between calls. Reads never fail: a missing, expired or
/// unreadable cookie is the same as "never consented", which is exactly
/// the state that makes the banner appear.
#[derive(Debug)]
pub struct ConsentStore<J: CookieJar, C: Clock = SystemClock> {
    jar: J,
    clock: C,
}

impl<J: CookieJar> ConsentStore<J> {
    pub fn new(jar: J) -> Self {
        Self::with_clock(jar, SystemClock)
    }
}

impl<J: CookieJar, C: Clock> ConsentStore<J, C> {
    pub fn with_clock(jar: J, clock: C) -> Self {
        Self { jar, clock }
    }

    /// The stored decision, if the visitor made one that is still valid.
    pub fn get(&self) -> Option<ConsentRecord> {
        let value = self.jar.get(cookie::CONSENT_COOKIE)?;
        cookie::decode(&value)
    }

    /// Record a decision, replacing whatever was stored before. The
    /// record always carries `functional: true` and the current time.
    pub fn set(&mut self, choice: ConsentChoice) -> ConsentRecord {
        let record = ConsentRecord::from_choice(choice, self.clock.now());
        let value = cookie::encode(&record);
        self.jar
            .set(cookie::CONSENT_COOKIE, &value, &cookie::attributes());
        tracing::debug!(
            analytical = record.analytical,
            marketing = record.marketing,
            "consent recorded"
        );
        record
    }

    /// Whether the visitor granted a category. `false` until a decision
    /// is stored; checking grants nothing and can be repeated freely.
    pub fn has_consent(&self, category: ConsentCategory) -> bool {
        self.get().is_some_and(|record| record.granted(category))
    }

    /// Forget the stored decision, so the next page load prompts again.
    pub fn withdraw(&mut self) {
        self.jar.remove(cookie::CONSENT_COOKIE);
        tracing::debug!("consent withdrawn");
    }

    /// The jar backing this store.
    pub fn jar(&self) -> &J {
        &self.jar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{CookieAttributes, ManualClock, MemoryCookieJar};
    use chrono::Duration;

    fn manual_store() -> (
        ConsentStore<MemoryCookieJar<ManualClock>, ManualClock>,
        ManualClock,
    ) {
        let clock = ManualClock::default();
        let jar = MemoryCookieJar::with_clock(clock.clone());
        (ConsentStore::with_clock(jar, clock.clone()), clock)
    }

    #[test]
    fn no_cookie_means_no_consent() {
        let (store, _) = manual_store();
        assert_eq!(store.get(), None);
        for category in ConsentCategory::ALL {
            assert!(!store.has_consent(category));
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let (mut store, clock) = manual_store();
        let choice = ConsentChoice {
            analytical: true,
            marketing: false,
        };
        let written = store.set(choice);

        assert!(written.functional);
        assert_eq!(written.timestamp, clock.now());

        let read = store.get().unwrap();
        assert_eq!(read, written);
        assert_eq!(read.choice(), choice);
    }

    #[test]
    fn has_consent_is_stable_across_repeated_checks() {
        let (mut store, _) = manual_store();
        store.set(ConsentChoice {
            analytical: true,
            marketing: false,
        });
        for _ in 0..3 {
            assert!(store.has_consent(ConsentCategory::Analytical));
            assert!(!store.has_consent(ConsentCategory::Marketing));
        }
    }

    #[test]
    fn last_write_wins() {
        let (mut store, _) = manual_store();
        store.set(ConsentChoice::ACCEPT_ALL);
        store.set(ConsentChoice::REJECT_ALL);
        let record = store.get().unwrap();
        assert!(!record.analytical);
        assert!(!record.marketing);
    }

    #[test]
    fn corrupt_cookie_reads_as_absent() {
        let clock = ManualClock::default();
        let mut jar = MemoryCookieJar::with_clock(clock.clone());
        jar.set(
            cookie::CONSENT_COOKIE,
            "%%%not-a-record",
            &CookieAttributes::default(),
        );
        let store = ConsentStore::with_clock(jar, clock);

        assert_eq!(store.get(), None);
        assert!(!store.has_consent(ConsentCategory::Analytical));
    }

    #[test]
    fn decision_expires_with_the_cookie() {
        let (mut store, clock) = manual_store();
        store.set(ConsentChoice::ACCEPT_ALL);

        clock.advance(Duration::days(cookie::CONSENT_RETENTION_DAYS - 1));
        assert!(store.has_consent(ConsentCategory::Marketing));

        clock.advance(Duration::days(2));
        assert_eq!(store.get(), None);
        assert!(!store.has_consent(ConsentCategory::Marketing));
    }

    #[test]
    fn withdraw_forgets_the_decision() {
        let (mut store, _) = manual_store();
        store.set(ConsentChoice::ACCEPT_ALL);
        store.withdraw();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn stored_value_is_url_encoded_json() {
        let (mut store, _) = manual_store();
        store.set(ConsentChoice::ACCEPT_ALL);
        let raw = store.jar().get(cookie::CONSENT_COOKIE).unwrap();
        assert!(raw.starts_with("%7B%22functional%22%3Atrue"));
        assert!(!raw.contains('{'));
    }
}
