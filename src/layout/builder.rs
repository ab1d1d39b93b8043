//! Turns question records into wrapped blocks and assembles the document

use crate::model::{QuestionPaper, QuestionRecord};

use super::config::PageGeometry;
use super::metrics::FontMetrics;
use super::types::*;
use super::wrap::wrap_text;

/// Indent level of option lines
pub const OPTION_INDENT: u8 = 1;
/// Indent level of answer text
pub const ANSWER_INDENT: u8 = 2;

/// Letter label for the option at a zero-based index (`0 -> A`)
pub fn option_label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(65))
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Wraps record text into lines using one geometry and font table
pub struct BlockBuilder<'a> {
    geometry: &'a PageGeometry,
    metrics: FontMetrics,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            metrics: FontMetrics::helvetica(),
        }
    }

    fn wrapped(&self, text: &str, style: TextStyle, font_size: f64, indent: u8) -> Vec<Line> {
        wrap_text(
            text,
            self.geometry.wrap_width(indent),
            &self.metrics,
            style,
            font_size,
        )
        .into_iter()
        .map(|t| Line::new(t, style, font_size).indented(indent))
        .collect()
    }

    /// Header, question text, then lettered options one level deeper
    pub fn question_block(&self, record: &QuestionRecord, index: usize) -> Block {
        let size = self.geometry.body_font_size;
        let header = format!(
            "Q{}. [{} marks] {}",
            index + 1,
            record.marks,
            record.kind.as_str().to_uppercase()
        );

        let mut lines = vec![Line::bold(header, size)];
        lines.extend(self.wrapped(&record.question, TextStyle::Normal, size, 0));
        for (i, option) in record.options().iter().enumerate() {
            let labelled = format!("{}. {}", option_label(i), option);
            lines.extend(self.wrapped(&labelled, TextStyle::Normal, size, OPTION_INDENT));
        }

        Block::new(BlockKind::Question, lines, self.geometry.question_spacing)
    }

    /// Bold label with the answer text starting on the same row
    pub fn answer_block(&self, record: &QuestionRecord, index: usize) -> Block {
        let size = self.geometry.body_font_size;
        let mut lines = vec![Line::bold(format!("Q{}.", index + 1), size)];
        let answer = self.wrapped(&record.answer, TextStyle::Normal, size, ANSWER_INDENT);
        for (i, line) in answer.into_iter().enumerate() {
            lines.push(if i == 0 { line.beside() } else { line });
        }
        Block::new(BlockKind::Answer, lines, self.geometry.answer_spacing)
    }

    fn heading(&self, text: &str, font_size: f64) -> Block {
        Block::new(
            BlockKind::Heading,
            vec![Line::bold(text, font_size).centered()],
            self.geometry.heading_spacing,
        )
    }

    fn paper_meta(&self, paper: &QuestionPaper) -> Vec<Block> {
        let size = self.geometry.meta_font_size;
        let mut meta = self.wrapped(&format!("Topic: {}", paper.topic), TextStyle::Bold, size, 0);
        meta.push(Line::bold(
            format!("Difficulty: {}", paper.difficulty.as_str().to_uppercase()),
            size,
        ));
        meta.push(Line::bold(
            format!("Date: {}", paper.created_at.format("%Y-%m-%d")),
            size,
        ));

        let total = Line::bold(
            format!("Total Marks: {}", paper.total_marks()),
            self.geometry.body_font_size,
        );
        vec![
            Block::new(BlockKind::Heading, meta, self.geometry.heading_spacing),
            Block::new(BlockKind::Heading, vec![total], self.geometry.answer_spacing),
        ]
    }
}

/// Build the two-section document for a paper
pub fn build_document(paper: &QuestionPaper, geometry: &PageGeometry) -> Document {
    let builder = BlockBuilder::new(geometry);

    let mut body = vec![builder.heading("Question Paper", geometry.title_font_size)];
    body.extend(builder.paper_meta(paper));
    body.extend(
        paper
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| builder.question_block(q, i)),
    );

    let mut answers = vec![builder.heading("Answer Key", geometry.answer_title_font_size)];
    answers.extend(
        paper
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| builder.answer_block(q, i)),
    );

    Document::new(vec![
        Section::new(SectionKind::Body, body),
        Section::new(SectionKind::AnswerKey, answers),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionType};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn mcq(options: &[&str]) -> QuestionRecord {
        QuestionRecord {
            question: "Which of the following best describes Graphs?".to_string(),
            kind: QuestionType::Mcq,
            marks: 2,
            options: Some(options.iter().map(|s| s.to_string()).collect()),
            answer: "Option A".to_string(),
        }
    }

    fn texts(block: &Block) -> Vec<&str> {
        block.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(1), 'B');
        assert_eq!(option_label(25), 'Z');
        assert_eq!(option_label(26), '[');
    }

    #[test]
    fn test_question_block_lines() {
        let geometry = PageGeometry::default();
        let block = BlockBuilder::new(&geometry).question_block(&mcq(&["X", "Y"]), 0);

        assert_eq!(
            texts(&block),
            vec![
                "Q1. [2 marks] MCQ",
                "Which of the following best describes Graphs?",
                "A. X",
                "B. Y",
            ]
        );
        assert_eq!(block.lines[0].style, TextStyle::Bold);
        assert_eq!(block.lines[1].style, TextStyle::Normal);
        assert_eq!(block.lines[1].indent, 0);
        assert_eq!(block.lines[2].indent, 1);
        assert_eq!(block.lines[3].indent, 1);
        assert_eq!(block.spacing_after, geometry.question_spacing);
        assert_eq!(block.required_height(geometry.line_height), 4.0 * 7.0 + 10.0);
    }

    #[test]
    fn test_empty_options_add_nothing() {
        let geometry = PageGeometry::default();
        let block = BlockBuilder::new(&geometry).question_block(&mcq(&[]), 4);
        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[0].text, "Q5. [2 marks] MCQ");
    }

    #[test]
    fn test_malformed_record_rendered_literally() {
        let geometry = PageGeometry::default();
        let record = QuestionRecord {
            question: String::new(),
            kind: QuestionType::Long,
            marks: -3,
            options: None,
            answer: String::new(),
        };
        let builder = BlockBuilder::new(&geometry);
        let q = builder.question_block(&record, 2);
        assert_eq!(texts(&q), vec!["Q3. [-3 marks] LONG"]);
        let a = builder.answer_block(&record, 2);
        assert_eq!(texts(&a), vec!["Q3."]);
    }

    #[test]
    fn test_answer_block_shares_first_row() {
        let geometry = PageGeometry::default();
        let record = QuestionRecord {
            question: "Explain.".to_string(),
            kind: QuestionType::Short,
            marks: 5,
            options: None,
            answer: "word ".repeat(80),
        };
        let block = BlockBuilder::new(&geometry).answer_block(&record, 9);

        assert_eq!(block.lines[0].text, "Q10.");
        assert_eq!(block.lines[0].style, TextStyle::Bold);
        assert_eq!(block.lines[1].flow, Flow::Beside);
        assert_eq!(block.lines[1].indent, ANSWER_INDENT);
        assert!(block.lines.len() > 2);
        assert_eq!(block.lines[2].flow, Flow::Below);
        assert_eq!(block.row_count(), block.lines.len() - 1);
    }

    #[test]
    fn test_long_option_wraps_at_indented_width() {
        let geometry = PageGeometry::default();
        let metrics = FontMetrics::helvetica();
        let long = "alternative ".repeat(30);
        let block = BlockBuilder::new(&geometry).question_block(&mcq(&[long.as_str()]), 0);
        let options: Vec<&Line> = block.lines.iter().filter(|l| l.indent == 1).collect();
        assert!(options.len() > 1);
        assert!(options[0].text.starts_with("A. alternative"));
        for line in options {
            let width = metrics.measure(&line.text, line.style, line.font_size);
            assert!(width <= geometry.wrap_width(1));
        }
    }

    #[test]
    fn test_build_document_sections() {
        let geometry = PageGeometry::default();
        let paper = QuestionPaper {
            id: "p".to_string(),
            topic: "Graphs".to_string(),
            difficulty: Difficulty::Medium,
            questions: vec![mcq(&["X", "Y"]), mcq(&["Z"])],
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        };
        let doc = build_document(&paper, &geometry);
        assert_eq!(doc.sections().len(), 2);

        let body = doc.section(SectionKind::Body).unwrap();
        assert_eq!(texts(&body.blocks[0]), vec!["Question Paper"]);
        assert_eq!(body.blocks[0].lines[0].align, Align::Center);
        assert_eq!(
            texts(&body.blocks[1]),
            vec!["Topic: Graphs", "Difficulty: MEDIUM", "Date: 2024-03-01"]
        );
        assert_eq!(texts(&body.blocks[2]), vec!["Total Marks: 4"]);
        assert_eq!(body.blocks.len(), 5);

        let key = doc.section(SectionKind::AnswerKey).unwrap();
        assert_eq!(texts(&key.blocks[0]), vec!["Answer Key"]);
        assert_eq!(key.blocks[0].lines[0].font_size, geometry.answer_title_font_size);
        assert_eq!(texts(&key.blocks[2]), vec!["Q2.", "Option A"]);
    }
}
