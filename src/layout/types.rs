//! Core types for the layout engine

/// Font weight tag carried by every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Normal,
    Bold,
}

/// Horizontal alignment of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Left,
    /// Centered on the page; x is the page midpoint
    Center,
}

/// How a line relates to the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// Starts a new visual row
    #[default]
    Below,
    /// Shares the visual row of the previous line
    Beside,
}

/// One pre-wrapped line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub style: TextStyle,
    pub indent: u8,
    pub font_size: f64,
    pub align: Align,
    pub flow: Flow,
}

impl Line {
    pub fn new(text: impl Into<String>, style: TextStyle, font_size: f64) -> Self {
        Self {
            text: text.into(),
            style,
            indent: 0,
            font_size,
            align: Align::Left,
            flow: Flow::Below,
        }
    }

    pub fn bold(text: impl Into<String>, font_size: f64) -> Self {
        Self::new(text, TextStyle::Bold, font_size)
    }

    pub fn normal(text: impl Into<String>, font_size: f64) -> Self {
        Self::new(text, TextStyle::Normal, font_size)
    }

    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn beside(mut self) -> Self {
        self.flow = Flow::Beside;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Title or metadata lines
    Heading,
    Question,
    Answer,
}

/// An atomically placed group of lines
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub lines: Vec<Line>,
    /// Vertical gap added after the last row
    pub spacing_after: f64,
}

impl Block {
    pub fn new(kind: BlockKind, lines: Vec<Line>, spacing_after: f64) -> Self {
        Self {
            kind,
            lines,
            spacing_after,
        }
    }

    /// Lines grouped into visual rows
    pub fn rows(&self) -> Vec<&[Line]> {
        let mut rows = Vec::new();
        let mut start = 0;
        for (i, line) in self.lines.iter().enumerate() {
            if i > start && line.flow == Flow::Below {
                rows.push(&self.lines[start..i]);
                start = i;
            }
        }
        if start < self.lines.len() {
            rows.push(&self.lines[start..]);
        }
        rows
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Vertical space the block takes when placed without a break
    pub fn required_height(&self, line_height: f64) -> f64 {
        self.row_count() as f64 * line_height + self.spacing_after
    }

    /// Whether the first row is a header that must not be left alone at the
    /// bottom of a page
    pub fn keeps_header_with_content(&self) -> bool {
        self.kind == BlockKind::Question && self.row_count() > 1
    }
}

/// Document region that always starts on a fresh page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Body,
    AnswerKey,
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Body => "body",
            SectionKind::AnswerKey => "answerKey",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(kind: SectionKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }
}

/// Ordered sections; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Text placed at page-relative coordinates (top-left origin)
#[derive(Debug, Clone, PartialEq)]
pub struct DrawText {
    pub page: usize,
    pub section: SectionKind,
    /// Index of the source block within its section
    pub block: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: TextStyle,
    pub font_size: f64,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Draw(DrawText),
    /// A new page was started; `page` is its index
    PageBreak { page: usize },
}

/// Result of a pagination pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub ops: Vec<RenderOp>,
}

impl PageLayout {
    /// Number of pages, counting the first page even when nothing is drawn
    pub fn page_count(&self) -> usize {
        1 + self
            .ops
            .iter()
            .filter(|op| matches!(op, RenderOp::PageBreak { .. }))
            .count()
    }

    pub fn draws(&self) -> impl Iterator<Item = &DrawText> {
        self.ops.iter().filter_map(|op| match op {
            RenderOp::Draw(d) => Some(d),
            RenderOp::PageBreak { .. } => None,
        })
    }

    pub fn draws_on(&self, page: usize) -> impl Iterator<Item = &DrawText> {
        self.draws().filter(move |d| d.page == page)
    }

    pub fn section_draws(&self, kind: SectionKind) -> impl Iterator<Item = &DrawText> {
        self.draws().filter(move |d| d.section == kind)
    }

    /// First and last page a section drew on
    pub fn section_pages(&self, kind: SectionKind) -> Option<(usize, usize)> {
        let mut pages = self.section_draws(kind).map(|d| d.page);
        let first = pages.next()?;
        let last = pages.last().unwrap_or(first);
        Some((first, last))
    }

    /// Draws grouped per page, in page order
    pub fn pages(&self) -> Vec<Vec<&DrawText>> {
        let mut pages = vec![Vec::new(); self.page_count()];
        for draw in self.draws() {
            if draw.page >= pages.len() {
                pages.resize(draw.page + 1, Vec::new());
            }
            pages[draw.page].push(draw);
        }
        pages
    }
}
