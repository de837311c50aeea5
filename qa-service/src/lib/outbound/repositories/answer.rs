use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::AnswerText;
use crate::domain::answer::models::NewAnswer;
use crate::domain::answer::ports::AnswerRepository;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;

pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    user_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = AnswerError;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        Ok(Answer {
            id: AnswerId(row.id),
            question_id: QuestionId(row.question_id),
            user_id: UserId(row.user_id),
            text: AnswerText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn create(&self, new_answer: NewAnswer) -> Result<Answer, AnswerError> {
        let row = sqlx::query_as::<_, AnswerRow>(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(new_answer.question_id.as_i64())
        .bind(new_answer.user_id.as_i64())
        .bind(new_answer.text.as_str())
        .bind(new_answer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AnswerError::QuestionNotFound(new_answer.question_id.as_i64());
                }
            }
            AnswerError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerError> {
        let row = sqlx::query_as::<_, AnswerRow>(
            "SELECT id, question_id, user_id, text, created_at FROM answers WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        row.map(Answer::try_from).transpose()
    }

    async fn list_by_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(question_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Answer::try_from).collect()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Answer>, AnswerError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Answer::try_from).collect()
    }

    async fn update(&self, answer: Answer) -> Result<Answer, AnswerError> {
        let result = sqlx::query("UPDATE answers SET text = $2 WHERE id = $1")
            .bind(answer.id.as_i64())
            .bind(answer.text.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AnswerError::NotFound(answer.id.as_i64()));
        }

        Ok(answer)
    }

    async fn delete(&self, id: &AnswerId) -> Result<(), AnswerError> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AnswerError::NotFound(id.as_i64()));
        }

        Ok(())
    }
}
