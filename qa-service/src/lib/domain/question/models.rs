use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::answer::models::Answer;
use crate::domain::question::errors::QuestionTextError;

/// Question aggregate entity.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub text: QuestionText,
    pub created_at: DateTime<Utc>,
}

/// Question unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question text value type; must contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    pub fn new(text: String) -> Result<Self, QuestionTextError> {
        if text.trim().is_empty() {
            Err(QuestionTextError::Empty)
        } else {
            Ok(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question with its answer count, as listed.
#[derive(Debug, Clone)]
pub struct QuestionWithCount {
    pub question: Question,
    pub answers_count: i64,
}

/// Question with its full answer list.
#[derive(Debug, Clone)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// New question record ready for persistence; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: QuestionText,
    pub created_at: DateTime<Utc>,
}

/// Command to update an existing question.
#[derive(Debug)]
pub struct UpdateQuestionCommand {
    pub text: Option<QuestionText>,
}
