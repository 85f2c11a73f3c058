//! Platform traits the stores persist through, with in-memory
//! implementations for tests and simulated sessions. Browser and
//! file-backed implementations live in their own crates.

pub mod clock;
pub mod cookies;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use cookies::{format_set_cookie, CookieAttributes, CookieJar, MemoryCookieJar, SameSite};
pub use storage::{KeyValueStorage, MemoryStorage};
