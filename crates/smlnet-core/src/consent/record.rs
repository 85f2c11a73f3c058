use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cookie category the visitor can grant or refuse.
///
/// Functional cookies are deliberately not a category: the site cannot
/// work without them, so every stored record carries `functional: true`
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Analytical,
    Marketing,
}

impl ConsentCategory {
    pub const ALL: [ConsentCategory; 2] =
        [ConsentCategory::Analytical, ConsentCategory::Marketing];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentCategory::Analytical => "analytical",
            ConsentCategory::Marketing => "marketing",
        }
    }
}

/// The visitor's answer to the consent prompt: one flag per optional
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsentChoice {
    pub analytical: bool,
    pub marketing: bool,
}

impl ConsentChoice {
    /// Every category granted ("Accept all").
    pub const ACCEPT_ALL: ConsentChoice = ConsentChoice {
        analytical: true,
        marketing: true,
    };

    /// Only the mandatory functional cookies ("Reject all").
    pub const REJECT_ALL: ConsentChoice = ConsentChoice {
        analytical: false,
        marketing: false,
    };
}

/// A stored consent decision.
///
/// This is the exact object persisted in the consent cookie. Field order
/// matches the serialized form and `timestamp` travels as epoch
/// milliseconds, keeping the cookie byte-compatible with records written
/// by earlier revisions of the site. Deserialization requires every
/// field, so a truncated stored object fails to parse and reads as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub functional: bool,
    pub analytical: bool,
    pub marketing: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ConsentRecord {
    /// The record persisted for a visitor choice. `functional` is always
    /// true; consent to it is implied by using the site.
    pub fn from_choice(choice: ConsentChoice, timestamp: DateTime<Utc>) -> ConsentRecord {
        ConsentRecord {
            functional: true,
            analytical: choice.analytical,
            marketing: choice.marketing,
            timestamp,
        }
    }

    /// Whether this record grants a category.
    pub fn granted(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Analytical => self.analytical,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// The choice this record captured, for seeding a preferences panel.
    pub fn choice(&self) -> ConsentChoice {
        ConsentChoice {
            analytical: self.analytical,
            marketing: self.marketing,
        }
    }
}
