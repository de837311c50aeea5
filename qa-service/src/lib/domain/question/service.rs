use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::answer::ports::AnswerRepository;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::NewQuestion;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionText;
use crate::domain::question::models::QuestionWithAnswers;
use crate::domain::question::models::QuestionWithCount;
use crate::domain::question::models::UpdateQuestionCommand;
use crate::domain::question::ports::QuestionRepository;
use crate::domain::question::ports::QuestionServicePort;

/// Domain service implementation for question operations.
pub struct QuestionService<QR, AR>
where
    QR: QuestionRepository,
    AR: AnswerRepository,
{
    repository: Arc<QR>,
    answer_repository: Arc<AR>,
}

impl<QR, AR> QuestionService<QR, AR>
where
    QR: QuestionRepository,
    AR: AnswerRepository,
{
    pub fn new(repository: Arc<QR>, answer_repository: Arc<AR>) -> Self {
        Self {
            repository,
            answer_repository,
        }
    }
}

#[async_trait]
impl<QR, AR> QuestionServicePort for QuestionService<QR, AR>
where
    QR: QuestionRepository,
    AR: AnswerRepository,
{
    async fn create_question(&self, text: QuestionText) -> Result<Question, QuestionError> {
        let new_question = NewQuestion {
            text,
            created_at: Utc::now(),
        };

        let question = self.repository.create(new_question).await?;
        tracing::info!(question_id = %question.id, "Question created");

        Ok(question)
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Question, QuestionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(QuestionError::NotFound(id.as_i64()))
    }

    async fn get_question_with_answers(
        &self,
        id: &QuestionId,
    ) -> Result<QuestionWithAnswers, QuestionError> {
        let question = self.get_question(id).await?;

        let answers = self
            .answer_repository
            .list_by_question(id)
            .await
            .map_err(|e| QuestionError::Unknown(e.to_string()))?;

        Ok(QuestionWithAnswers { question, answers })
    }

    async fn list_questions(&self) -> Result<Vec<QuestionWithCount>, QuestionError> {
        self.repository.list_with_counts().await
    }

    async fn update_question(
        &self,
        id: &QuestionId,
        command: UpdateQuestionCommand,
    ) -> Result<Question, QuestionError> {
        let mut question = self.get_question(id).await?;

        if let Some(new_text) = command.text {
            question.text = new_text;
        }

        let updated_question = self.repository.update(question).await?;
        tracing::info!(question_id = %updated_question.id, "Question updated");

        Ok(updated_question)
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), QuestionError> {
        self.repository.delete(id).await?;
        tracing::info!(question_id = %id, "Question deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::answer::errors::AnswerError;
    use crate::domain::answer::models::Answer;
    use crate::domain::answer::models::AnswerId;
    use crate::domain::answer::models::AnswerText;
    use crate::domain::answer::models::NewAnswer;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestQuestionRepository {}

        #[async_trait]
        impl QuestionRepository for TestQuestionRepository {
            async fn create(&self, new_question: NewQuestion) -> Result<Question, QuestionError>;
            async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError>;
            async fn list_with_counts(&self) -> Result<Vec<QuestionWithCount>, QuestionError>;
            async fn update(&self, question: Question) -> Result<Question, QuestionError>;
            async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError>;
        }
    }

    mock! {
        pub TestAnswerRepository {}

        #[async_trait]
        impl AnswerRepository for TestAnswerRepository {
            async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AnswerError>;
            async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerError>;
            async fn list_by_question(&self, question_id: &QuestionId) -> Result<Vec<Answer>, AnswerError>;
            async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError>;
            async fn update(&self, answer: Answer) -> Result<Answer, AnswerError>;
            async fn delete(&self, id: &AnswerId) -> Result<(), AnswerError>;
        }
    }

    fn question(id: i64, text: &str) -> Question {
        Question {
            id: QuestionId(id),
            text: QuestionText::new(text.to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_question() {
        let mut repository = MockTestQuestionRepository::new();
        repository
            .expect_create()
            .withf(|new_question| new_question.text.as_str() == "What is ownership?")
            .times(1)
            .returning(|new_question| {
                Ok(Question {
                    id: QuestionId(1),
                    text: new_question.text,
                    created_at: new_question.created_at,
                })
            });

        let service = QuestionService::new(
            Arc::new(repository),
            Arc::new(MockTestAnswerRepository::new()),
        );

        let created = service
            .create_question(QuestionText::new("What is ownership?".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, QuestionId(1));
    }

    #[tokio::test]
    async fn test_get_question_not_found() {
        let mut repository = MockTestQuestionRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = QuestionService::new(
            Arc::new(repository),
            Arc::new(MockTestAnswerRepository::new()),
        );

        let result = service.get_question(&QuestionId(5)).await;
        assert!(matches!(result.unwrap_err(), QuestionError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_get_question_with_answers() {
        let mut repository = MockTestQuestionRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(question(1, "What is ownership?"))));

        let mut answer_repository = MockTestAnswerRepository::new();
        answer_repository
            .expect_list_by_question()
            .times(1)
            .returning(|question_id| {
                Ok(vec![Answer {
                    id: AnswerId(10),
                    question_id: *question_id,
                    user_id: UserId(2),
                    text: AnswerText::new("Borrowing without moving".to_string()).unwrap(),
                    created_at: Utc::now(),
                }])
            });

        let service = QuestionService::new(Arc::new(repository), Arc::new(answer_repository));

        let with_answers = service
            .get_question_with_answers(&QuestionId(1))
            .await
            .unwrap();
        assert_eq!(with_answers.question.id, QuestionId(1));
        assert_eq!(with_answers.answers.len(), 1);
        assert_eq!(with_answers.answers[0].question_id, QuestionId(1));
    }

    #[tokio::test]
    async fn test_update_question_text() {
        let mut repository = MockTestQuestionRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(question(1, "Old text"))));
        repository
            .expect_update()
            .withf(|q| q.text.as_str() == "New text")
            .times(1)
            .returning(|q| Ok(q));

        let service = QuestionService::new(
            Arc::new(repository),
            Arc::new(MockTestAnswerRepository::new()),
        );

        let updated = service
            .update_question(
                &QuestionId(1),
                UpdateQuestionCommand {
                    text: Some(QuestionText::new("New text".to_string()).unwrap()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text.as_str(), "New text");
    }

    #[tokio::test]
    async fn test_delete_question_not_found() {
        let mut repository = MockTestQuestionRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(QuestionError::NotFound(id.as_i64())));

        let service = QuestionService::new(
            Arc::new(repository),
            Arc::new(MockTestAnswerRepository::new()),
        );

        let result = service.delete_question(&QuestionId(3)).await;
        assert!(matches!(result.unwrap_err(), QuestionError::NotFound(3)));
    }
}
