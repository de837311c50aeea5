use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::answers::AnswerData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::question::errors::QuestionError;
use crate::domain::question::models::QuestionId;
use crate::domain::question::models::QuestionText;
use crate::domain::question::models::QuestionWithAnswers;
use crate::domain::question::models::QuestionWithCount;
use crate::domain::question::models::UpdateQuestionCommand;
use crate::inbound::http::router::AppState;

pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<QuestionData>>, ApiError> {
    state
        .question_service
        .list_questions()
        .await
        .map_err(ApiError::from)
        .map(|questions| {
            ApiSuccess::new(
                StatusCode::OK,
                questions.iter().map(QuestionData::from).collect(),
            )
        })
}

pub async fn create_question(
    State(state): State<AppState>,
    Json(body): Json<CreateQuestionRequest>,
) -> Result<ApiSuccess<QuestionData>, ApiError> {
    let text = QuestionText::new(body.text).map_err(QuestionError::from)?;

    let question = state
        .question_service
        .create_question(text)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        QuestionData {
            id: question.id.as_i64(),
            text: question.text.as_str().to_string(),
            created_at: question.created_at,
            answers_count: 0,
        },
    ))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<ApiSuccess<QuestionWithAnswersData>, ApiError> {
    state
        .question_service
        .get_question_with_answers(&QuestionId(question_id))
        .await
        .map_err(ApiError::from)
        .map(|ref with_answers| ApiSuccess::new(StatusCode::OK, with_answers.into()))
}

pub async fn update_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(body): Json<UpdateQuestionRequest>,
) -> Result<ApiSuccess<QuestionData>, ApiError> {
    let text = body
        .text
        .map(QuestionText::new)
        .transpose()
        .map_err(QuestionError::from)?;

    let question = state
        .question_service
        .update_question(&QuestionId(question_id), UpdateQuestionCommand { text })
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        QuestionData {
            id: question.id.as_i64(),
            text: question.text.as_str().to_string(),
            created_at: question.created_at,
            answers_count: 0,
        },
    ))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<ApiSuccess<DeleteQuestionResponseData>, ApiError> {
    state
        .question_service
        .delete_question(&QuestionId(question_id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteQuestionResponseData {
                    message: "Question successfully deleted".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateQuestionRequest {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateQuestionRequest {
    text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionData {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub answers_count: i64,
}

impl From<&QuestionWithCount> for QuestionData {
    fn from(with_count: &QuestionWithCount) -> Self {
        Self {
            id: with_count.question.id.as_i64(),
            text: with_count.question.text.as_str().to_string(),
            created_at: with_count.question.created_at,
            answers_count: with_count.answers_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionWithAnswersData {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerData>,
}

impl From<&QuestionWithAnswers> for QuestionWithAnswersData {
    fn from(with_answers: &QuestionWithAnswers) -> Self {
        Self {
            id: with_answers.question.id.as_i64(),
            text: with_answers.question.text.as_str().to_string(),
            created_at: with_answers.question.created_at,
            answers: with_answers.answers.iter().map(AnswerData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteQuestionResponseData {
    pub message: String,
}
