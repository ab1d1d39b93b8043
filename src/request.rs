//! Paper request handling
//!
//! The request flow is an explicit state machine: a request moves the state
//! from `Idle` (or a previous result) to `Success` or `Failed`. Collaborator
//! errors never escape; they become the message carried by `Failed`.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::PaperError;
use crate::generator::generate_questions;
use crate::model::{Difficulty, QuestionPaper, QuestionRecord};

/// Input as received from the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaperRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
}

impl PaperRequest {
    pub fn new(topic: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Check required fields and parse the difficulty
    pub fn validate(&self) -> Result<(String, Difficulty), PaperError> {
        let topic = self.topic.trim();
        if topic.is_empty() || self.difficulty.trim().is_empty() {
            return Err(PaperError::input_shape("Topic and difficulty are required"));
        }
        Ok((topic.to_string(), self.difficulty.parse::<Difficulty>()?))
    }
}

/// Where question records come from
pub trait QuestionSource {
    fn fetch(
        &mut self,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<QuestionRecord>, PaperError>;
}

/// Local source backed by the template generator
pub struct TemplateSource<R> {
    rng: R,
}

impl<R: Rng> TemplateSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> QuestionSource for TemplateSource<R> {
    fn fetch(
        &mut self,
        topic: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<QuestionRecord>, PaperError> {
        Ok(generate_questions(topic, difficulty, &mut self.rng))
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    questions: Option<Vec<QuestionRecord>>,
    error: Option<String>,
}

/// Parse a generator reply: `{"questions": [...]}` or `{"error": "..."}`
pub fn parse_response(body: &str) -> Result<Vec<QuestionRecord>, PaperError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| PaperError::input_shape(format!("malformed generator response: {}", e)))?;
    if let Some(error) = response.error {
        return Err(PaperError::network(error));
    }
    response
        .questions
        .ok_or_else(|| PaperError::input_shape("generator response is missing the question array"))
}

/// UI-facing state of a paper request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaperState {
    #[default]
    Idle,
    Generating,
    Success(QuestionPaper),
    Failed(String),
}

impl PaperState {
    pub fn is_generating(&self) -> bool {
        matches!(self, PaperState::Generating)
    }

    pub fn paper(&self) -> Option<&QuestionPaper> {
        match self {
            PaperState::Success(paper) => Some(paper),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PaperState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn assemble<S: QuestionSource + ?Sized>(
    request: &PaperRequest,
    source: &mut S,
    now: DateTime<Utc>,
) -> Result<QuestionPaper, PaperError> {
    let (topic, difficulty) = request.validate()?;
    let questions = source.fetch(&topic, difficulty)?;
    Ok(QuestionPaper {
        id: format!("{}-{}", difficulty, now.timestamp_millis()),
        topic,
        difficulty,
        questions,
        created_at: now,
    })
}

/// Run one request from `state`; a request already in flight is left alone
pub fn handle_request<S: QuestionSource + ?Sized>(
    state: &PaperState,
    request: &PaperRequest,
    source: &mut S,
    now: DateTime<Utc>,
) -> PaperState {
    if state.is_generating() {
        warn!("request ignored: generation already in progress");
        return state.clone();
    }

    match assemble(request, source, now) {
        Ok(paper) => {
            info!(
                topic = %paper.topic,
                difficulty = %paper.difficulty,
                questions = paper.questions.len(),
                "paper generated"
            );
            PaperState::Success(paper)
        }
        Err(e) => {
            warn!(error = %e, "paper request failed");
            PaperState::Failed(e.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FailingSource;

    impl QuestionSource for FailingSource {
        fn fetch(&mut self, _: &str, _: Difficulty) -> Result<Vec<QuestionRecord>, PaperError> {
            Err(PaperError::network("connection reset"))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_success_path() {
        let mut source = TemplateSource::new(StdRng::seed_from_u64(3));
        let state = handle_request(
            &PaperState::Idle,
            &PaperRequest::new("  Graphs ", "medium"),
            &mut source,
            now(),
        );
        let paper = state.paper().expect("paper");
        assert_eq!(paper.topic, "Graphs");
        assert_eq!(paper.questions.len(), 15);
        assert_eq!(paper.total_marks(), 58);
        assert_eq!(paper.created_at, now());
    }

    #[test]
    fn test_missing_fields() {
        let mut source = TemplateSource::new(StdRng::seed_from_u64(3));
        let state = handle_request(
            &PaperState::Idle,
            &PaperRequest::new("", "easy"),
            &mut source,
            now(),
        );
        assert_eq!(state.error(), Some("Topic and difficulty are required"));
        let state = handle_request(&state, &PaperRequest::new("Graphs", " "), &mut source, now());
        assert_eq!(state.error(), Some("Topic and difficulty are required"));
    }

    #[test]
    fn test_unknown_difficulty_is_input_shape() {
        let err = PaperRequest::new("Graphs", "extreme").validate().unwrap_err();
        assert!(matches!(err, PaperError::InputShape(_)));
    }

    #[test]
    fn test_network_failure_becomes_generic_message() {
        let state = handle_request(
            &PaperState::Idle,
            &PaperRequest::new("Graphs", "hard"),
            &mut FailingSource,
            now(),
        );
        let message = state.error().expect("failed");
        assert!(!message.contains("connection reset"));
    }

    #[test]
    fn test_generating_state_is_not_reentered() {
        let state = handle_request(
            &PaperState::Generating,
            &PaperRequest::new("Graphs", "hard"),
            &mut FailingSource,
            now(),
        );
        assert_eq!(state, PaperState::Generating);
    }

    #[test]
    fn test_parse_response_questions() {
        let body = r#"{"questions":[{"question":"Q","type":"short","marks":5,"answer":"A"}]}"#;
        let questions = parse_response(body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].marks, 5);
    }

    #[test]
    fn test_parse_response_errors() {
        assert!(matches!(
            parse_response(r#"{"error":"Topic and difficulty are required"}"#),
            Err(PaperError::Network(_))
        ));
        assert!(matches!(parse_response("{}"), Err(PaperError::InputShape(_))));
        assert!(matches!(parse_response("not json"), Err(PaperError::InputShape(_))));
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: PaperRequest = serde_json::from_str(r#"{"topic":"Graphs"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
