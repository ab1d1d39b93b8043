//! Plain-text dump of a page layout, mainly for inspection and tests

use crate::layout::{Align, PageGeometry, PageLayout};

/// Render pages as text: a `--- page N ---` separator per page, each line
/// indented by two spaces per `indent_width` from the page margin.
/// Centered lines are prefixed with `^`.
pub fn render_text(layout: &PageLayout, geometry: &PageGeometry) -> String {
    let mut out = String::new();
    for (index, draws) in layout.pages().into_iter().enumerate() {
        out.push_str(&format!("--- page {} ---\n", index + 1));

        let mut last_y = None;
        for draw in draws {
            let same_row = last_y == Some(draw.y);
            last_y = Some(draw.y);
            if same_row {
                out.push(' ');
                out.push_str(&draw.text);
                continue;
            }
            if !out.ends_with('\n') {
                out.push('\n');
            }
            match draw.align {
                Align::Center => out.push('^'),
                Align::Left => {
                    let step = geometry.indent_width.max(f64::EPSILON);
                    let steps = ((draw.x - geometry.margin) / step).round().max(0.0) as usize;
                    out.push_str(&"  ".repeat(steps));
                }
            }
            out.push_str(&draw.text);
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DrawText, RenderOp, SectionKind, TextStyle};
    use pretty_assertions::assert_eq;

    fn draw(page: usize, x: f64, y: f64, text: &str, align: Align) -> RenderOp {
        RenderOp::Draw(DrawText {
            page,
            section: SectionKind::Body,
            block: 0,
            x,
            y,
            text: text.to_string(),
            style: TextStyle::Normal,
            font_size: 10.0,
            align,
        })
    }

    #[test]
    fn test_render_text() {
        let layout = PageLayout {
            ops: vec![
                draw(0, 105.0, 20.0, "Title", Align::Center),
                draw(0, 20.0, 27.0, "Q1.", Align::Left),
                draw(0, 25.0, 34.0, "A. X", Align::Left),
                RenderOp::PageBreak { page: 1 },
                draw(1, 20.0, 20.0, "Q1.", Align::Left),
                draw(1, 30.0, 20.0, "Option A", Align::Left),
            ],
        };
        assert_eq!(
            render_text(&layout, &PageGeometry::default()),
            "--- page 1 ---\n^Title\nQ1.\n  A. X\n--- page 2 ---\nQ1. Option A\n"
        );
    }

    #[test]
    fn test_indent_measured_from_margin() {
        // Page starts mid-option-list: every line is at indent 1
        let layout = PageLayout {
            ops: vec![
                draw(0, 25.0, 20.0, "C. third", Align::Left),
                draw(0, 25.0, 27.0, "D. fourth", Align::Left),
            ],
        };
        assert_eq!(
            render_text(&layout, &PageGeometry::default()),
            "--- page 1 ---\n  C. third\n  D. fourth\n"
        );
    }

    #[test]
    fn test_blank_page() {
        assert_eq!(
            render_text(&PageLayout::default(), &PageGeometry::default()),
            "--- page 1 ---\n"
        );
    }
}
