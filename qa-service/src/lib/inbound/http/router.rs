use std::sync::Arc;
use std::time::Duration;

use auth::SessionIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::answers::create_answer;
use super::handlers::answers::delete_answer;
use super::handlers::answers::get_answer;
use super::handlers::answers::list_question_answers;
use super::handlers::answers::list_user_answers;
use super::handlers::answers::update_answer;
use super::handlers::current_user::current_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::questions::create_question;
use super::handlers::questions::delete_question;
use super::handlers::questions::get_question;
use super::handlers::questions::list_questions;
use super::handlers::questions::update_question;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register_user::register_user;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::answer::ports::AnswerServicePort;
use crate::domain::question::ports::QuestionServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub question_service: Arc<dyn QuestionServicePort>,
    pub answer_service: Arc<dyn AnswerServicePort>,
    pub sessions: Arc<SessionIssuer>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    question_service: Arc<dyn QuestionServicePort>,
    answer_service: Arc<dyn AnswerServicePort>,
    sessions: Arc<SessionIssuer>,
) -> Router {
    let state = AppState {
        user_service,
        question_service,
        answer_service,
        sessions,
    };

    let public_routes = Router::new()
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/register", post(register_user))
        .route("/api/v1/users/login", post(login))
        .route("/api/v1/users/refresh", post(refresh_token))
        .route("/api/v1/users/:user_id", get(get_user))
        .route("/api/v1/users/:user_id", put(update_user))
        .route("/api/v1/users/:user_id", delete(delete_user))
        .route("/api/v1/questions", get(list_questions))
        .route("/api/v1/questions", post(create_question))
        .route("/api/v1/questions/:question_id", get(get_question))
        .route("/api/v1/questions/:question_id", put(update_question))
        .route("/api/v1/questions/:question_id", delete(delete_question))
        .route(
            "/api/v1/questions/:question_id/answers",
            get(list_question_answers),
        )
        .route("/api/v1/answers/user/:user_id", get(list_user_answers))
        .route("/api/v1/answers/:answer_id", get(get_answer));

    let protected_routes = Router::new()
        .route("/api/v1/users/me", get(current_user))
        .route("/api/v1/answers", post(create_answer))
        .route("/api/v1/answers/:answer_id", put(update_answer))
        .route("/api/v1/answers/:answer_id", delete(delete_answer))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
