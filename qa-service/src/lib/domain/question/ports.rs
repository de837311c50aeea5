use async_trait::async_trait;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::NewQuestion;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionText;
use crate::domain::question::models::QuestionWithAnswers;
use crate::domain::question::models::QuestionWithCount;
use crate::domain::question::models::UpdateQuestionCommand;

/// Port for question domain service operations.
#[async_trait]
pub trait QuestionServicePort: Send + Sync + 'static {
    async fn create_question(&self, text: QuestionText) -> Result<Question, QuestionError>;

    /// # Errors
    /// * `NotFound` - Question does not exist
    async fn get_question(&self, id: &QuestionId) -> Result<Question, QuestionError>;

    /// Retrieve a question together with all of its answers.
    async fn get_question_with_answers(
        &self,
        id: &QuestionId,
    ) -> Result<QuestionWithAnswers, QuestionError>;

    /// Retrieve all questions with their answer counts.
    async fn list_questions(&self) -> Result<Vec<QuestionWithCount>, QuestionError>;

    async fn update_question(
        &self,
        id: &QuestionId,
        command: UpdateQuestionCommand,
    ) -> Result<Question, QuestionError>;

    /// Delete a question; its answers go with it.
    async fn delete_question(&self, id: &QuestionId) -> Result<(), QuestionError>;
}

/// Persistence operations for the question aggregate.
#[async_trait]
pub trait QuestionRepository: Send + Sync + 'static {
    async fn create(&self, new_question: NewQuestion) -> Result<Question, QuestionError>;

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError>;

    async fn list_with_counts(&self) -> Result<Vec<QuestionWithCount>, QuestionError>;

    /// # Errors
    /// * `NotFound` - Question does not exist
    async fn update(&self, question: Question) -> Result<Question, QuestionError>;

    /// Remove the question; answers cascade at the storage level.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError>;
}
