//! Template-based question generation
//!
//! Generation is a pure function of topic, difficulty and an injected random
//! source, so a seeded RNG reproduces a paper exactly.

use rand::Rng;
use tracing::debug;

use crate::model::{Difficulty, QuestionRecord, QuestionType};

const MCQ_TEMPLATES: [&str; 5] = [
    "What is the primary concept of {topic}?",
    "Which of the following best describes {topic}?",
    "In the context of {topic}, what is most important?",
    "How does {topic} relate to modern applications?",
    "What are the key principles of {topic}?",
];

const SHORT_TEMPLATES: [&str; 5] = [
    "Explain the basic concept of {topic}.",
    "Describe the importance of {topic} in practical applications.",
    "What are the main characteristics of {topic}?",
    "How would you implement {topic} in a real-world scenario?",
    "Compare and contrast different approaches to {topic}.",
];

const LONG_TEMPLATES: [&str; 4] = [
    "Discuss in detail the theoretical foundations and practical applications of {topic}.",
    "Analyze the evolution and future prospects of {topic}.",
    "Critically evaluate the advantages and limitations of {topic}.",
    "Provide a comprehensive overview of {topic} with relevant examples.",
];

const MCQ_OPTIONS: [&str; 4] = [
    "Fundamental principle of {topic}",
    "Alternative approach to {topic}",
    "Common misconception about {topic}",
    "Advanced technique in {topic}",
];

/// Number of questions on a paper
pub fn question_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 15,
        Difficulty::Hard => 20,
    }
}

/// Marks awarded for a question type at a difficulty
pub fn marks_for(difficulty: Difficulty, kind: QuestionType) -> i64 {
    match (difficulty, kind) {
        (Difficulty::Easy, QuestionType::Mcq) => 1,
        (Difficulty::Easy, QuestionType::Short) => 3,
        (Difficulty::Easy, QuestionType::Long) => 5,
        (Difficulty::Medium, QuestionType::Mcq) => 2,
        (Difficulty::Medium, QuestionType::Short) => 5,
        (Difficulty::Medium, QuestionType::Long) => 10,
        (Difficulty::Hard, QuestionType::Mcq) => 2,
        (Difficulty::Hard, QuestionType::Short) => 7,
        (Difficulty::Hard, QuestionType::Long) => 15,
    }
}

/// Type of the question at `index`: first 60% mcq, next 25% short, rest long
pub fn question_type_at(index: usize, count: usize) -> QuestionType {
    let position = index as f64;
    let count = count as f64;
    if position < count * 0.6 {
        QuestionType::Mcq
    } else if position < count * 0.85 {
        QuestionType::Short
    } else {
        QuestionType::Long
    }
}

fn templates(kind: QuestionType) -> &'static [&'static str] {
    match kind {
        QuestionType::Mcq => &MCQ_TEMPLATES,
        QuestionType::Short => &SHORT_TEMPLATES,
        QuestionType::Long => &LONG_TEMPLATES,
    }
}

fn fill(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}

/// Generate the ordered questions for a paper
pub fn generate_questions<R: Rng + ?Sized>(
    topic: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let count = question_count(difficulty);
    let questions: Vec<QuestionRecord> = (0..count)
        .map(|i| {
            let kind = question_type_at(i, count);
            let pool = templates(kind);
            let question = fill(pool[rng.gen_range(0..pool.len())], topic);

            let (options, answer) = match kind {
                QuestionType::Mcq => (
                    Some(MCQ_OPTIONS.iter().map(|o| fill(o, topic)).collect()),
                    "Option A".to_string(),
                ),
                _ => (None, format!("Sample answer for {} question.", topic)),
            };

            QuestionRecord {
                question,
                kind,
                marks: marks_for(difficulty, kind),
                options,
                answer,
            }
        })
        .collect();

    debug!(topic, difficulty = %difficulty, count = questions.len(), "generated questions");
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_medium_graphs_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        let questions = generate_questions("Graphs", Difficulty::Medium, &mut rng);
        assert_eq!(questions.len(), 15);

        let kinds: Vec<QuestionType> = questions.iter().map(|q| q.kind).collect();
        assert!(kinds[0..9].iter().all(|k| *k == QuestionType::Mcq));
        assert!(kinds[9..13].iter().all(|k| *k == QuestionType::Short));
        assert!(kinds[13..15].iter().all(|k| *k == QuestionType::Long));

        assert!(questions[0..9].iter().all(|q| q.marks == 2));
        assert!(questions[9..13].iter().all(|q| q.marks == 5));
        assert!(questions[13..15].iter().all(|q| q.marks == 10));

        let total: i64 = questions.iter().map(|q| q.marks).sum();
        assert_eq!(total, 58);
    }

    #[test]
    fn test_question_counts() {
        assert_eq!(question_count(Difficulty::Easy), 10);
        assert_eq!(question_count(Difficulty::Hard), 20);
    }

    #[test]
    fn test_type_split_for_easy() {
        let kinds: Vec<QuestionType> = (0..10).map(|i| question_type_at(i, 10)).collect();
        assert_eq!(kinds.iter().filter(|k| **k == QuestionType::Mcq).count(), 6);
        // 8 < 8.5, 9 >= 8.5
        assert_eq!(kinds[8], QuestionType::Short);
        assert_eq!(kinds[9], QuestionType::Long);
    }

    #[test]
    fn test_marks_table() {
        assert_eq!(marks_for(Difficulty::Easy, QuestionType::Long), 5);
        assert_eq!(marks_for(Difficulty::Hard, QuestionType::Short), 7);
        assert_eq!(marks_for(Difficulty::Hard, QuestionType::Long), 15);
    }

    #[test]
    fn test_mcq_content() {
        let mut rng = StdRng::seed_from_u64(1);
        let questions = generate_questions("Sorting", Difficulty::Easy, &mut rng);
        let first = &questions[0];
        assert_eq!(first.answer, "Option A");
        assert_eq!(first.options().len(), 4);
        assert_eq!(first.options()[0], "Fundamental principle of Sorting");
        assert!(first.question.contains("Sorting"));

        let last = questions.last().unwrap();
        assert!(last.options.is_none());
        assert_eq!(last.answer, "Sample answer for Sorting question.");
    }

    #[test]
    fn test_same_seed_same_paper() {
        let a = generate_questions("Graphs", Difficulty::Hard, &mut StdRng::seed_from_u64(42));
        let b = generate_questions("Graphs", Difficulty::Hard, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
