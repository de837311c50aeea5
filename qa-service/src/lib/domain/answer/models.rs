use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::answer::errors::AnswerTextError;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;

/// Answer aggregate entity.
///
/// An answer always belongs to a question and to the user who wrote it.
#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub text: AnswerText,
    pub created_at: DateTime<Utc>,
}

/// Answer unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(pub i64);

impl AnswerId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Answer text value type; must contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(text: String) -> Result<Self, AnswerTextError> {
        if text.trim().is_empty() {
            Err(AnswerTextError::Empty)
        } else {
            Ok(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// New answer record ready for persistence; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub text: AnswerText,
    pub created_at: DateTime<Utc>,
}

/// Command to update an existing answer.
#[derive(Debug)]
pub struct UpdateAnswerCommand {
    pub text: Option<AnswerText>,
}
