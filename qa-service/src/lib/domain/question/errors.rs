use thiserror::Error;

/// Error for QuestionText validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionTextError {
    #[error("Question text must not be empty")]
    Empty,
}

/// Top-level error for question operations
#[derive(Debug, Clone, Error)]
pub enum QuestionError {
    #[error("Invalid question text: {0}")]
    InvalidText(#[from] QuestionTextError),

    #[error("Question not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
