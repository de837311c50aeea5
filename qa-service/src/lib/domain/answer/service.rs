use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::AnswerText;
use crate::domain::answer::models::NewAnswer;
use crate::domain::answer::models::UpdateAnswerCommand;
use crate::domain::answer::ports::AnswerRepository;
use crate::domain::answer::ports::AnswerServicePort;
use crate::domain::question::models::QuestionId;
use crate::domain::question::ports::QuestionRepository;
use crate::domain::user::models::UserId;

/// Domain service implementation for answer operations.
///
/// Holds the question repository as well: an answer may only be created
/// against a question that exists.
pub struct AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    repository: Arc<AR>,
    question_repository: Arc<QR>,
}

impl<AR, QR> AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    pub fn new(repository: Arc<AR>, question_repository: Arc<QR>) -> Self {
        Self {
            repository,
            question_repository,
        }
    }

    async fn require_question(&self, question_id: &QuestionId) -> Result<(), AnswerError> {
        self.question_repository
            .find_by_id(question_id)
            .await
            .map_err(|e| AnswerError::Unknown(e.to_string()))?
            .map(|_| ())
            .ok_or(AnswerError::QuestionNotFound(question_id.as_i64()))
    }
}

#[async_trait]
impl<AR, QR> AnswerServicePort for AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    async fn create_answer(
        &self,
        question_id: &QuestionId,
        author: &UserId,
        text: AnswerText,
    ) -> Result<Answer, AnswerError> {
        self.require_question(question_id).await?;

        let new_answer = NewAnswer {
            question_id: *question_id,
            user_id: *author,
            text,
            created_at: Utc::now(),
        };

        let answer = self.repository.create(new_answer).await?;
        tracing::info!(
            answer_id = %answer.id,
            question_id = %answer.question_id,
            user_id = %answer.user_id,
            "Answer created"
        );

        Ok(answer)
    }

    async fn get_answer(&self, id: &AnswerId) -> Result<Answer, AnswerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AnswerError::NotFound(id.as_i64()))
    }

    async fn list_answers_for_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerError> {
        self.require_question(question_id).await?;
        self.repository.list_by_question(question_id).await
    }

    async fn list_answers_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError> {
        self.repository.list_by_user(user_id).await
    }

    async fn update_answer(
        &self,
        id: &AnswerId,
        caller: &UserId,
        command: UpdateAnswerCommand,
    ) -> Result<Answer, AnswerError> {
        let mut answer = self.get_answer(id).await?;

        if answer.user_id != *caller {
            tracing::warn!(
                answer_id = %id,
                user_id = %caller,
                author_id = %answer.user_id,
                "Rejected update of another user's answer"
            );
            return Err(AnswerError::NotAuthor);
        }

        if let Some(new_text) = command.text {
            answer.text = new_text;
        }

        let updated_answer = self.repository.update(answer).await?;
        tracing::info!(answer_id = %updated_answer.id, "Answer updated");

        Ok(updated_answer)
    }

    async fn delete_answer(&self, id: &AnswerId, caller: &UserId) -> Result<(), AnswerError> {
        let answer = self.get_answer(id).await?;

        if answer.user_id != *caller {
            tracing::warn!(
                answer_id = %id,
                user_id = %caller,
                author_id = %answer.user_id,
                "Rejected deletion of another user's answer"
            );
            return Err(AnswerError::NotAuthor);
        }

        self.repository.delete(id).await?;
        tracing::info!(answer_id = %id, "Answer deleted");

        Ok(())
    }
}
