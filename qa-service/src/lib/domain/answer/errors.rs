use thiserror::Error;

/// Error for AnswerText validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnswerTextError {
    #[error("Answer text must not be empty")]
    Empty,
}

/// Top-level error for answer operations
#[derive(Debug, Clone, Error)]
pub enum AnswerError {
    #[error("Invalid answer text: {0}")]
    InvalidText(#[from] AnswerTextError),

    #[error("Answer not found: {0}")]
    NotFound(i64),

    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    /// Only the author may modify or delete an answer.
    #[error("Answer belongs to another user")]
    NotAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
