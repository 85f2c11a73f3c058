//! Cookie consent: the stored record, the wire codec and the store that
//! ties them to a cookie jar.

pub mod cookie;
pub mod record;
pub mod store;

pub use record::{ConsentCategory, ConsentChoice, ConsentRecord};
pub use store::ConsentStore;
