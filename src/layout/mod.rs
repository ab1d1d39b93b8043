//! Layout engine for question papers
//!
//! This module wraps question records into blocks of lines, groups them into
//! the body and answer-key sections, and paginates the result into a
//! `PageLayout` of positioned text and page-break events.

pub mod builder;
pub mod config;
pub mod metrics;
pub mod paginate;
pub mod types;
pub mod wrap;

pub use builder::{build_document, option_label, BlockBuilder};
pub use config::PageGeometry;
pub use metrics::FontMetrics;
pub use paginate::paginate;
pub use types::*;
pub use wrap::{wrap, wrap_text};
