use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::answer::errors::AnswerError;
use crate::domain::answer::models::Answer;
use crate::domain::answer::models::AnswerId;
use crate::domain::answer::models::AnswerText;
use crate::domain::answer::models::UpdateAnswerCommand;
use crate::domain::question::models::QuestionId;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_answer(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAnswerRequest>,
) -> Result<ApiSuccess<AnswerData>, ApiError> {
    let text = AnswerText::new(body.text).map_err(AnswerError::from)?;

    state
        .answer_service
        .create_answer(
            &QuestionId(body.question_id),
            &authenticated.user_id,
            text,
        )
        .await
        .map_err(ApiError::from)
        .map(|ref answer| ApiSuccess::new(StatusCode::CREATED, answer.into()))
}

pub async fn get_answer(
    State(state): State<AppState>,
    Path(answer_id): Path<i64>,
) -> Result<ApiSuccess<AnswerData>, ApiError> {
    state
        .answer_service
        .get_answer(&AnswerId(answer_id))
        .await
        .map_err(ApiError::from)
        .map(|ref answer| ApiSuccess::new(StatusCode::OK, answer.into()))
}

pub async fn list_question_answers(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<ApiSuccess<Vec<AnswerData>>, ApiError> {
    state
        .answer_service
        .list_answers_for_question(&QuestionId(question_id))
        .await
        .map_err(ApiError::from)
        .map(|answers| {
            ApiSuccess::new(
                StatusCode::OK,
                answers.iter().map(AnswerData::from).collect(),
            )
        })
}

pub async fn list_user_answers(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<ApiSuccess<Vec<AnswerData>>, ApiError> {
    state
        .answer_service
        .list_answers_by_user(&UserId(user_id))
        .await
        .map_err(ApiError::from)
        .map(|answers| {
            ApiSuccess::new(
                StatusCode::OK,
                answers.iter().map(AnswerData::from).collect(),
            )
        })
}

pub async fn update_answer(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(answer_id): Path<i64>,
    Json(body): Json<UpdateAnswerRequest>,
) -> Result<ApiSuccess<AnswerData>, ApiError> {
    let text = body
        .text
        .map(AnswerText::new)
        .transpose()
        .map_err(AnswerError::from)?;

    state
        .answer_service
        .update_answer(
            &AnswerId(answer_id),
            &authenticated.user_id,
            UpdateAnswerCommand { text },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref answer| ApiSuccess::new(StatusCode::OK, answer.into()))
}

pub async fn delete_answer(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(answer_id): Path<i64>,
) -> Result<ApiSuccess<DeleteAnswerResponseData>, ApiError> {
    state
        .answer_service
        .delete_answer(&AnswerId(answer_id), &authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteAnswerResponseData {
                    message: "Answer successfully deleted".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAnswerRequest {
    question_id: i64,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateAnswerRequest {
    text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerData {
    pub id: i64,
    pub question_id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Answer> for AnswerData {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.as_i64(),
            question_id: answer.question_id.as_i64(),
            user_id: answer.user_id.as_i64(),
            text: answer.text.as_str().to_string(),
            created_at: answer.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAnswerResponseData {
    pub message: String,
}
