//! Bolseiro UI Components
//!
//! Leptos components and browser adapters for the Bolseiro page studio.
//!
//! # Components
//!
//! ## Form
//! - [`FormSection`] - collapsible editor section
//! - [`TextField`] / [`TextAreaField`] / [`CheckboxField`] - labelled inputs
//! - [`StringListEditor`] - ordered string sequences
//! - [`TitledListEditor`] / [`TimelineEditor`] / [`FaqEditor`] - record lists
//!
//! ## Preview
//! - [`PreviewPane`] - rendered/markup views over the generated document
//!
//! # Browser adapters
//!
//! - [`storage::ContentStore`] - localStorage persistence
//! - [`export`] - file download and clipboard copy

pub mod export;
pub mod form;
pub mod preview;
pub mod storage;

pub use form::{
    CheckboxField, FaqEditor, FormSection, StringListEditor, TextAreaField, TextField,
    TimelineEditor, TitledListEditor,
};
pub use preview::PreviewPane;
pub use storage::ContentStore;
