//! Output backends for paginated layouts
//!
//! Each backend serializes a `PageLayout` page by page: PDF via `lopdf`,
//! one SVG document per page, or a plain-text dump.

pub mod config;
pub mod pdf;
pub mod svg;
pub mod text;

pub use config::SvgConfig;
pub use pdf::render_pdf;
pub use svg::render_svg_pages;
pub use text::render_text;
