//! Wire codec for the consent cookie.
//!
//! The stored value is the JSON record escaped with
//! [`encodeURIComponent` semantics](crate::uri), so cookies written here
//! and by the browser site decode each other. Decoding fails soft: any
//! unreadable value means "no consent stored".

use chrono::Duration;

use crate::consent::ConsentRecord;
use crate::platform::{CookieAttributes, SameSite};
use crate::uri;

/// Name of the single consent cookie.
pub const CONSENT_COOKIE: &str = "smlnet_consent";

/// How long a stored decision stays valid, roughly 12 months. Once the
/// cookie expires the visitor is prompted again.
pub const CONSENT_RETENTION_DAYS: i64 = 365;

/// Retention window as a duration.
pub fn retention() -> Duration {
    Duration::days(CONSENT_RETENTION_DAYS)
}

/// Attributes for every consent cookie write: site-wide path, `Lax`
/// same-site policy, retention-window max age.
pub fn attributes() -> CookieAttributes {
    CookieAttributes {
        path: "/".to_owned(),
        same_site: SameSite::Lax,
        max_age: Some(retention()),
    }
}

/// Encode a record into the cookie value.
pub fn encode(record: &ConsentRecord) -> String {
    // A flat struct of bools and an integer timestamp always serializes.
    let json = serde_json::to_string(record).unwrap_or_default();
    uri::encode_component(&json)
}

/// Decode a cookie value. Any failure reads as "no consent stored".
pub fn decode(value: &str) -> Option<ConsentRecord> {
    let Some(json) = uri::decode_component(value) else {
        tracing::warn!("consent cookie is not valid percent-encoded UTF-8, treating as absent");
        return None;
    };
    match serde_json::from_str(&json) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(%err, "consent cookie failed to parse, treating as absent");
            None
        }
    }
}
