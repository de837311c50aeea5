use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::NewQuestion;
use crate::domain::question::models::Question;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionText;
use crate::domain::question::models::QuestionWithCount;
use crate::domain::question::ports::QuestionRepository;

pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = QuestionError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId(row.id),
            text: QuestionText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct QuestionWithCountRow {
    id: i64,
    text: String,
    created_at: DateTime<Utc>,
    answers_count: i64,
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn create(&self, new_question: NewQuestion) -> Result<Question, QuestionError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (text, created_at)
            VALUES ($1, $2)
            RETURNING id, text, created_at
            "#,
        )
        .bind(new_question.text.as_str())
        .bind(new_question.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, text, created_at FROM questions WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        row.map(Question::try_from).transpose()
    }

    async fn list_with_counts(&self) -> Result<Vec<QuestionWithCount>, QuestionError> {
        let rows = sqlx::query_as::<_, QuestionWithCountRow>(
            r#"
            SELECT q.id, q.text, q.created_at, COUNT(a.id) AS answers_count
            FROM questions q
            LEFT JOIN answers a ON a.question_id = q.id
            GROUP BY q.id, q.text, q.created_at
            ORDER BY q.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                Ok(QuestionWithCount {
                    question: Question {
                        id: QuestionId(row.id),
                        text: QuestionText::new(row.text)?,
                        created_at: row.created_at,
                    },
                    answers_count: row.answers_count,
                })
            })
            .collect()
    }

    async fn update(&self, question: Question) -> Result<Question, QuestionError> {
        let result = sqlx::query("UPDATE questions SET text = $2 WHERE id = $1")
            .bind(question.id.as_i64())
            .bind(question.text.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(QuestionError::NotFound(question.id.as_i64()));
        }

        Ok(question)
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError> {
        // Answers go with the question via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(QuestionError::NotFound(id.as_i64()));
        }

        Ok(())
    }
}
