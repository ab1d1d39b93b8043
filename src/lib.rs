//! Question Paper - paginated layout for generated question papers
//!
//! This library turns an ordered list of question records into a printable,
//! paginated document: a question body followed by an answer key that always
//! starts on its own page.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use question_paper::{layout_paper, render_text, Difficulty, QuestionPaper, RenderConfig};
//! use question_paper::generator::generate_questions;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let paper = QuestionPaper {
//!     id: "demo".to_string(),
//!     topic: "Graphs".to_string(),
//!     difficulty: Difficulty::Medium,
//!     questions: generate_questions("Graphs", Difficulty::Medium, &mut rng),
//!     created_at: Utc::now(),
//! };
//!
//! let config = RenderConfig::default();
//! let layout = layout_paper(&paper, &config);
//! assert!(layout.page_count() >= 2);
//! assert!(render_text(&layout, &config.geometry).contains("Answer Key"));
//! ```

pub mod error;
pub mod generator;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod request;

pub use error::{ConfigError, PaperError, RenderError};
pub use layout::{build_document, paginate, PageGeometry, PageLayout};
pub use model::{Difficulty, QuestionPaper, QuestionRecord, QuestionType};
pub use renderer::{render_pdf, render_svg_pages, render_text, SvgConfig};
pub use request::{handle_request, PaperRequest, PaperState, QuestionSource, TemplateSource};

/// Serialization target for a rendered paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    /// One SVG file per page
    Svg,
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
            OutputFormat::Text => "txt",
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Page geometry and thresholds
    pub geometry: PageGeometry,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Output format
    pub format: OutputFormat,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// A named output artifact
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Build and paginate the paper's document
pub fn layout_paper(paper: &QuestionPaper, config: &RenderConfig) -> PageLayout {
    let document = build_document(paper, &config.geometry);
    paginate(&document, &config.geometry)
}

/// Render a paper to output files named after topic, difficulty and timestamp
pub fn render_paper(
    paper: &QuestionPaper,
    config: &RenderConfig,
    timestamp_ms: i64,
) -> Result<Vec<OutputFile>, RenderError> {
    let layout = layout_paper(paper, config);
    let stem = paper.file_stem(timestamp_ms);

    let files = match config.format {
        OutputFormat::Pdf => vec![OutputFile {
            name: paper.file_name(timestamp_ms),
            bytes: render_pdf(&layout, &config.geometry)?,
        }],
        OutputFormat::Svg => render_svg_pages(&layout, &config.geometry, &config.svg)
            .into_iter()
            .enumerate()
            .map(|(i, svg)| OutputFile {
                name: format!("{}_page{}.{}", stem, i + 1, config.format.extension()),
                bytes: svg.into_bytes(),
            })
            .collect(),
        OutputFormat::Text => vec![OutputFile {
            name: format!("{}.{}", stem, config.format.extension()),
            bytes: render_text(&layout, &config.geometry).into_bytes(),
        }],
    };
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn paper() -> QuestionPaper {
        QuestionPaper {
            id: "t".to_string(),
            topic: "Binary Trees".to_string(),
            difficulty: Difficulty::Easy,
            questions: vec![QuestionRecord {
                question: "What is a leaf?".to_string(),
                kind: QuestionType::Mcq,
                marks: 1,
                options: Some(vec!["X".to_string(), "Y".to_string()]),
                answer: "Option A".to_string(),
            }],
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_render_pdf_file_name() {
        let files = render_paper(&paper(), &RenderConfig::default(), 1704164645000).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "Binary_Trees_easy_1704164645000.pdf");
        assert!(files[0].bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_svg_one_file_per_page() {
        let config = RenderConfig::new().with_format(OutputFormat::Svg);
        let files = render_paper(&paper(), &config, 7).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "Binary_Trees_easy_7_page1.svg");
        assert_eq!(files[1].name, "Binary_Trees_easy_7_page2.svg");
    }

    #[test]
    fn test_render_text_output() {
        let config = RenderConfig::new().with_format(OutputFormat::Text);
        let files = render_paper(&paper(), &config, 7).unwrap();
        let text = String::from_utf8(files[0].bytes.clone()).unwrap();
        assert!(text.contains("Q1. [1 marks] MCQ"));
        assert!(text.contains("  A. X"));
        assert!(text.contains("--- page 2 ---\n^Answer Key\nQ1. Option A\n"));
    }

    #[test]
    fn test_output_extensions() {
        assert_eq!(OutputFormat::Pdf.extension(), "pdf");
        assert_eq!(OutputFormat::Svg.extension(), "svg");
        assert_eq!(OutputFormat::Text.extension(), "txt");
    }
}
