//! Page geometry for the paginator
//!
//! All lengths are millimetres; font sizes are points. Every threshold the
//! paginator uses lives here so it can be tuned from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Page size, margins, line metrics and overflow thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,

    /// Left/right/top margin; also the cursor reset position after a break
    pub margin: f64,

    /// Vertical advance per visual row
    pub line_height: f64,

    /// Rows must end above `page_height - bottom_threshold`
    pub bottom_threshold: f64,

    /// Earlier threshold used to keep a header together with its content
    pub header_threshold: f64,

    /// Horizontal offset per indentation level
    pub indent_width: f64,

    /// Spacing after a question block
    pub question_spacing: f64,

    /// Spacing after an answer block
    pub answer_spacing: f64,

    /// Spacing after a heading block
    pub heading_spacing: f64,

    pub body_font_size: f64,
    pub meta_font_size: f64,
    pub title_font_size: f64,
    pub answer_title_font_size: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // A4 portrait
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            line_height: 7.0,
            bottom_threshold: 30.0,
            header_threshold: 40.0,
            indent_width: 5.0,
            question_spacing: 10.0,
            answer_spacing: 5.0,
            heading_spacing: 8.0,
            body_font_size: 10.0,
            meta_font_size: 12.0,
            title_font_size: 20.0,
            answer_title_font_size: 16.0,
        }
    }
}

impl PageGeometry {
    /// Create a geometry with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load geometry from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load geometry from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let geometry: PageGeometry = toml::from_str(content)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject geometry the paginator cannot place anything on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("line_height", self.line_height),
            ("body_font_size", self.body_font_size),
            ("meta_font_size", self.meta_font_size),
            ("title_font_size", self.title_font_size),
            ("answer_title_font_size", self.answer_title_font_size),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive", name)));
            }
        }
        let non_negative = [
            ("margin", self.margin),
            ("bottom_threshold", self.bottom_threshold),
            ("header_threshold", self.header_threshold),
            ("indent_width", self.indent_width),
            ("question_spacing", self.question_spacing),
            ("answer_spacing", self.answer_spacing),
            ("heading_spacing", self.heading_spacing),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{} must not be negative", name)));
            }
        }
        if self.content_width() <= 0.0 {
            return Err(ConfigError::Invalid(
                "margins leave no room for content".to_string(),
            ));
        }
        if self.margin >= self.page_height {
            return Err(ConfigError::Invalid(
                "margin exceeds the page height".to_string(),
            ));
        }
        Ok(())
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Wrap width for a line at the given indentation level
    pub fn wrap_width(&self, indent: u8) -> f64 {
        self.content_width() - f64::from(indent) * self.indent_width
    }

    /// Lowest y a row may end at
    pub fn row_limit(&self) -> f64 {
        self.page_height - self.bottom_threshold
    }

    /// Lowest y a header row may end at when it must keep its content
    pub fn header_limit(&self) -> f64 {
        self.page_height - self.header_threshold
    }

    /// Set the page size
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set both overflow thresholds
    pub fn with_thresholds(mut self, bottom: f64, header: f64) -> Self {
        self.bottom_threshold = bottom;
        self.header_threshold = header;
        self
    }

    /// Set the question, answer and heading spacings
    pub fn with_spacing(mut self, question: f64, answer: f64, heading: f64) -> Self {
        self.question_spacing = question;
        self.answer_spacing = answer;
        self.heading_spacing = heading;
        self
    }
}
