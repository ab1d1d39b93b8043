//! Error types for paper requests, geometry configuration and output

use thiserror::Error;

/// Errors raised at the boundary with the question-generation collaborator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaperError {
    /// Request or response is missing required fields
    #[error("{0}")]
    InputShape(String),

    /// Transport failure reaching the generator
    #[error("failed to generate questions: {0}")]
    Network(String),
}

impl PaperError {
    pub fn input_shape(message: impl Into<String>) -> Self {
        Self::InputShape(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// The message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::InputShape(msg) => msg.clone(),
            Self::Network(_) => "Failed to generate questions. Please try again.".to_string(),
        }
    }
}

/// Errors that can occur when loading page geometry
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read geometry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse geometry TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid geometry: {0}")]
    Invalid(String),
}

/// Errors from the output backends
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
