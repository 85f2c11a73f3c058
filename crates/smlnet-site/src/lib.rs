//! Site-level building blocks for SMLnet: the bilingual copy catalog,
//! the route table, consent banner behavior, the contact form and the
//! embedded legal documents.
//!
//! Everything here is presentation-free. A rendering shell (browser or
//! the CLI simulator) owns the stores from `smlnet-core` and drives
//! these types against them.

pub mod banner;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod legal;
pub mod routes;

pub use banner::{BannerView, ConsentBanner, SharedBanner};
pub use config::SiteConfig;
pub use contact::{ContactForm, Field, FormError, Service};
pub use routes::Route;
