//! SVG generation, one document per page

use crate::layout::metrics::MM_PER_POINT;
use crate::layout::{Align, DrawText, PageGeometry, PageLayout, TextStyle};

use super::SvgConfig;

/// Build a page's SVG incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a positioned line of text; `y` is the baseline in millimetres
    pub fn add_text(&mut self, draw: &DrawText) {
        let prefix = self.prefix();
        let anchor = match draw.align {
            Align::Left => "start",
            Align::Center => "middle",
        };
        let weight = match draw.style {
            TextStyle::Normal => "normal",
            TextStyle::Bold => "bold",
        };

        self.elements.push(format!(
            r#"{}<text class="{}line {}{}" x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            prefix,
            draw.section.name(),
            draw.x,
            draw.y,
            round(draw.font_size * MM_PER_POINT),
            weight,
            anchor,
            escape_xml(&draw.text)
        ));
    }

    /// Build the final SVG string for a page of the given size
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}" font-family="{f}">"#,
            w = width,
            h = height,
            f = escape_xml(&self.config.font_family)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render every page of a layout to its own SVG document
pub fn render_svg_pages(
    layout: &PageLayout,
    geometry: &PageGeometry,
    config: &SvgConfig,
) -> Vec<String> {
    layout
        .pages()
        .into_iter()
        .map(|draws| {
            let mut builder = SvgBuilder::new(config.clone());
            for draw in draws {
                builder.add_text(draw);
            }
            builder.build(geometry.page_width, geometry.page_height)
        })
        .collect()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
