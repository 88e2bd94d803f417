//! Bolseiro Core Library
//!
//! Content model, site configuration, and editing operations for the
//! Bolseiro page studio.

pub mod collection;
pub mod config;
pub mod model;
pub mod sync;

pub use config::SiteConfig;
pub use model::{
    CallToAction, FaqEntry, Hero, Listing, QuickInfo, Scholarship, Seo, TimelineEntry, TitledItem,
};
pub use sync::{COUNTRY_PLACEHOLDER, ListingUpdate, apply_listing_update};
