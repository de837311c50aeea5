use async_trait::async_trait;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::AnswerText;
use crate::domain::answer::models::NewAnswer;
use crate::domain::answer::models::UpdateAnswerCommand;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;

/// Port for answer domain service operations.
#[async_trait]
pub trait AnswerServicePort: Send + Sync + 'static {
    /// Create an answer authored by the given user.
    ///
    /// # Errors
    /// * `QuestionNotFound` - The question does not exist
    async fn create_answer(
        &self,
        question_id: &QuestionId,
        author: &UserId,
        text: AnswerText,
    ) -> Result<Answer, AnswerError>;

    /// # Errors
    /// * `NotFound` - Answer does not exist
    async fn get_answer(&self, id: &AnswerId) -> Result<Answer, AnswerError>;

    /// Retrieve all answers for a question.
    ///
    /// # Errors
    /// * `QuestionNotFound` - The question does not exist
    async fn list_answers_for_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerError>;

    /// Retrieve all answers written by a user.
    async fn list_answers_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError>;

    /// Update an answer's text.
    ///
    /// # Errors
    /// * `NotFound` - Answer does not exist
    /// * `NotAuthor` - Caller is not the answer's author
    async fn update_answer(
        &self,
        id: &AnswerId,
        caller: &UserId,
        command: UpdateAnswerCommand,
    ) -> Result<Answer, AnswerError>;

    /// Delete an answer.
    ///
    /// # Errors
    /// * `NotFound` - Answer does not exist
    /// * `NotAuthor` - Caller is not the answer's author
    async fn delete_answer(&self, id: &AnswerId, caller: &UserId) -> Result<(), AnswerError>;
}

/// Persistence operations for the answer aggregate.
#[async_trait]
pub trait AnswerRepository: Send + Sync + 'static {
    async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AnswerError>;

    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerError>;

    async fn list_by_question(&self, question_id: &QuestionId)
        -> Result<Vec<Answer>, AnswerError>;

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError>;

    /// # Errors
    /// * `NotFound` - Answer does not exist
    async fn update(&self, answer: Answer) -> Result<Answer, AnswerError>;

    /// # Errors
    /// * `NotFound` - Answer does not exist
    async fn delete(&self, id: &AnswerId) -> Result<(), AnswerError>;
}
