//! Bolseiro Generator Library
//!
//! Static page generation for the Bolseiro page studio.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`page`] - document generation from the content model
//! - [`escape`] - HTML escaping for interpolated free text
//! - [`listing`] - listing metadata export and filename derivation

pub mod escape;
pub mod listing;
pub mod page;
pub mod template;

pub use escape::escape_html;
pub use listing::{DEFAULT_EXPORT_STEM, export_filename, listing_json};
pub use page::PageGenerator;
pub use template::{Template, TemplateContext, TemplateError, TemplateRegistry};
