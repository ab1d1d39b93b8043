//! Question records and the assembled question paper

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PaperError;

/// Kind of question, as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Short,
    Long,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Short => "short",
            QuestionType::Long => "long",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paper difficulty; drives question count and marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(PaperError::input_shape(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            ))),
        }
    }
}

/// One generated question with its answer
///
/// Content is taken as-is: empty text or non-positive marks are rendered
/// literally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub marks: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
}

impl QuestionRecord {
    /// Options, treating an absent list like an empty one
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// A complete paper: metadata plus ordered questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPaper {
    pub id: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionRecord>,
    pub created_at: DateTime<Utc>,
}

impl QuestionPaper {
    pub fn total_marks(&self) -> i64 {
        self.questions.iter().map(|q| q.marks).sum()
    }

    /// Output filename stem: topic with whitespace runs collapsed to `_`,
    /// then difficulty and a millisecond timestamp
    pub fn file_stem(&self, timestamp_ms: i64) -> String {
        let topic = self.topic.split_whitespace().collect::<Vec<_>>().join("_");
        // Leading/trailing whitespace also collapses to an underscore
        let lead = if self.topic.starts_with(char::is_whitespace) { "_" } else { "" };
        let trail = if self.topic.ends_with(char::is_whitespace) && !topic.is_empty() {
            "_"
        } else {
            ""
        };
        format!("{}{}{}_{}_{}", lead, topic, trail, self.difficulty, timestamp_ms)
    }

    /// Filename for the PDF artifact
    pub fn file_name(&self, timestamp_ms: i64) -> String {
        format!("{}.pdf", self.file_stem(timestamp_ms))
    }
}
