use std::cell::RefCell;
use std::rc::Rc;

use smlnet_core::consent::{ConsentChoice, ConsentRecord, ConsentStore};
use smlnet_core::platform::{Clock, CookieJar};

/// What the consent banner is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerView {
    /// Nothing; the visitor has a valid stored decision.
    Hidden,
    /// The first-visit notice with accept / reject / customise.
    Notice,
    /// The per-category preferences panel.
    Preferences,
}

impl BannerView {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerView::Hidden => "hidden",
            BannerView::Notice => "notice",
            BannerView::Preferences => "preferences",
        }
    }
}

/// Behavior of the consent banner, independent of any rendering.
///
/// The view switches between the notice and the preferences panel; the
/// draft holds the panel's toggles until they are saved. Every write
/// goes through the consent store wholesale, so closing the banner and
/// a stored record always coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentBanner {
    view: BannerView,
    draft: ConsentChoice,
}

impl ConsentBanner {
    /// Banner state for a fresh page load: the notice when no valid
    /// decision is stored, hidden otherwise.
    pub fn on_page_load<J: CookieJar, C: Clock>(store: &ConsentStore<J, C>) -> ConsentBanner {
        let view = if store.get().is_some() {
            BannerView::Hidden
        } else {
            BannerView::Notice
        };
        ConsentBanner {
            view,
            draft: ConsentChoice::REJECT_ALL,
        }
    }

    pub fn view(&self) -> BannerView {
        self.view
    }

    pub fn is_visible(&self) -> bool {
        self.view != BannerView::Hidden
    }

    /// The preferences panel's current toggles.
    pub fn draft(&self) -> ConsentChoice {
        self.draft
    }

    /// "Accept all": store a full grant and hide.
    pub fn accept_all<J: CookieJar, C: Clock>(
        &mut self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.close_with(store, ConsentChoice::ACCEPT_ALL)
    }

    /// "Reject all": store a functional-only record and hide.
    pub fn reject_all<J: CookieJar, C: Clock>(
        &mut self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.close_with(store, ConsentChoice::REJECT_ALL)
    }

    /// "Customise": open the preferences panel from the notice.
    pub fn customize(&mut self) {
        self.view = BannerView::Preferences;
    }

    pub fn set_analytical(&mut self, granted: bool) {
        self.draft.analytical = granted;
    }

    pub fn set_marketing(&mut self, granted: bool) {
        self.draft.marketing = granted;
    }

    /// "Save preferences": store the draft and hide.
    pub fn save_preferences<J: CookieJar, C: Clock>(
        &mut self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.close_with(store, self.draft)
    }

    /// Reopen the preferences panel, the footer "Cookie settings" entry
    /// point. An existing decision seeds the toggles; otherwise they
    /// start all-off.
    pub fn open_settings<J: CookieJar, C: Clock>(&mut self, store: &ConsentStore<J, C>) {
        if let Some(record) = store.get() {
            self.draft = record.choice();
        }
        self.view = BannerView::Preferences;
    }

    fn close_with<J: CookieJar, C: Clock>(
        &mut self,
        store: &mut ConsentStore<J, C>,
        choice: ConsentChoice,
    ) -> ConsentRecord {
        let record = store.set(choice);
        self.view = BannerView::Hidden;
        record
    }
}

/// A cloneable handle to one banner shared between the page shell and
/// the footer.
///
/// The footer's "Cookie settings" link must reopen the same banner the
/// shell renders. Instead of broadcasting an untyped event, whoever
/// needs to reopen the panel holds a clone of this handle; the state it
/// points at is one [`ConsentBanner`].
#[derive(Debug, Clone)]
pub struct SharedBanner {
    inner: Rc<RefCell<ConsentBanner>>,
}

impl SharedBanner {
    pub fn on_page_load<J: CookieJar, C: Clock>(store: &ConsentStore<J, C>) -> SharedBanner {
        SharedBanner {
            inner: Rc::new(RefCell::new(ConsentBanner::on_page_load(store))),
        }
    }

    pub fn view(&self) -> BannerView {
        self.inner.borrow().view()
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().is_visible()
    }

    pub fn draft(&self) -> ConsentChoice {
        self.inner.borrow().draft()
    }

    pub fn accept_all<J: CookieJar, C: Clock>(
        &self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.inner.borrow_mut().accept_all(store)
    }

    pub fn reject_all<J: CookieJar, C: Clock>(
        &self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.inner.borrow_mut().reject_all(store)
    }

    pub fn customize(&self) {
        self.inner.borrow_mut().customize();
    }

    pub fn set_analytical(&self, granted: bool) {
        self.inner.borrow_mut().set_analytical(granted);
    }

    pub fn set_marketing(&self, granted: bool) {
        self.inner.borrow_mut().set_marketing(granted);
    }

    pub fn save_preferences<J: CookieJar, C: Clock>(
        &self,
        store: &mut ConsentStore<J, C>,
    ) -> ConsentRecord {
        self.inner.borrow_mut().save_preferences(store)
    }

    pub fn open_settings<J: CookieJar, C: Clock>(&self, store: &ConsentStore<J, C>) {
        self.inner.borrow_mut().open_settings(store);
    }
}
