//! Pagination pass: places wrapped blocks onto fixed-size pages
//!
//! The pass walks sections in order, keeping a `PageCursor` with the current
//! page index and vertical offset. Each section starts on a fresh page. Before
//! a question block is placed, its header row is checked against the earlier
//! `header_threshold` and the row after it against `bottom_threshold`, so a
//! header is never stranded at the bottom of a page without its text. Every
//! row is then checked against `bottom_threshold`; a paragraph that does not
//! fit continues on the next page.
//!
//! The pass is total: it returns a [`PageLayout`] for any document and any
//! geometry, and never emits a break on a page that has nothing on it yet.

use tracing::{debug, info};

use super::config::PageGeometry;
use super::types::*;

/// Render-time position: page index and vertical offset from the page top
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageCursor {
    page: usize,
    y: f64,
    /// Whether anything has been drawn on the current page
    has_content: bool,
}

impl PageCursor {
    fn new(margin: f64) -> Self {
        Self {
            page: 0,
            y: margin,
            has_content: false,
        }
    }
}

struct Paginator<'a> {
    geometry: &'a PageGeometry,
    cursor: PageCursor,
    ops: Vec<RenderOp>,
}

impl<'a> Paginator<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            cursor: PageCursor::new(geometry.margin),
            ops: Vec::new(),
        }
    }

    fn break_page(&mut self) {
        self.cursor.page += 1;
        self.cursor.y = self.geometry.margin;
        self.cursor.has_content = false;
        self.ops.push(RenderOp::PageBreak {
            page: self.cursor.page,
        });
        debug!(page = self.cursor.page, "page break");
    }

    /// Make room for a row ending at `cursor.y + line_height <= limit`
    fn ensure_room(&mut self, limit: f64) {
        if self.cursor.y + self.geometry.line_height <= limit {
            return;
        }
        if self.cursor.has_content {
            self.break_page();
        } else {
            // Only spacing so far; start over at the top of this page
            self.cursor.y = self.geometry.margin;
        }
    }

    fn start_section(&mut self, section: &Section) {
        if self.cursor.has_content {
            self.break_page();
        }
        self.cursor.y = self.geometry.margin;
        debug!(
            section = section.kind.name(),
            page = self.cursor.page,
            blocks = section.blocks.len(),
            "section start"
        );
    }

    fn line_x(&self, line: &Line) -> f64 {
        match line.align {
            Align::Left => {
                self.geometry.margin + f64::from(line.indent) * self.geometry.indent_width
            }
            Align::Center => self.geometry.page_width / 2.0,
        }
    }

    /// Whether a header row and the row after it both fit from the cursor
    fn header_fits(&self) -> bool {
        let line_height = self.geometry.line_height;
        self.cursor.y + line_height <= self.geometry.header_limit()
            && self.cursor.y + 2.0 * line_height <= self.geometry.row_limit()
    }

    fn place_block(&mut self, section: SectionKind, index: usize, block: &Block) {
        if block.keeps_header_with_content() && self.cursor.has_content && !self.header_fits() {
            debug!(
                section = section.name(),
                block = index,
                height = block.required_height(self.geometry.line_height),
                "moving header to next page"
            );
            self.break_page();
        }

        for row in block.rows() {
            self.ensure_room(self.geometry.row_limit());
            for line in row {
                self.ops.push(RenderOp::Draw(DrawText {
                    page: self.cursor.page,
                    section,
                    block: index,
                    x: self.line_x(line),
                    y: self.cursor.y,
                    text: line.text.clone(),
                    style: line.style,
                    font_size: line.font_size,
                    align: line.align,
                }));
            }
            self.cursor.has_content = true;
            self.cursor.y += self.geometry.line_height;
        }
        self.cursor.y += block.spacing_after;
    }

    fn run(mut self, doc: &Document) -> PageLayout {
        for section in doc.sections() {
            self.start_section(section);
            for (index, block) in section.blocks.iter().enumerate() {
                self.place_block(section.kind, index, block);
            }
        }
        let layout = PageLayout { ops: self.ops };
        info!(
            pages = layout.page_count(),
            draws = layout.draws().count(),
            "pagination finished"
        );
        layout
    }
}

/// Lay a document out onto pages
pub fn paginate(doc: &Document, geometry: &PageGeometry) -> PageLayout {
    Paginator::new(geometry).run(doc)
}
