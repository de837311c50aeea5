use std::sync::Arc;

use auth::SessionConfig;
use auth::SessionIssuer;
use qa_service::domain::answer::service::AnswerService;
use qa_service::domain::question::service::QuestionService;
use qa_service::domain::user::service::UserService;
use qa_service::inbound::http::router::create_router;
use qa_service::outbound::repositories::InMemoryAnswerRepository;
use qa_service::outbound::repositories::InMemoryDb;
use qa_service::outbound::repositories::InMemoryQuestionRepository;
use qa_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by in-memory
/// repositories, so the suite runs without external services.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with default token lifetimes.
    pub async fn spawn() -> Self {
        Self::spawn_with_lifetimes(30, 7).await
    }

    /// Spawn the application with explicit token lifetimes, for expiry tests.
    pub async fn spawn_with_lifetimes(access_token_minutes: i64, refresh_token_days: i64) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let db = InMemoryDb::new();
        let user_repository = Arc::new(InMemoryUserRepository::new(Arc::clone(&db)));
        let question_repository = Arc::new(InMemoryQuestionRepository::new(Arc::clone(&db)));
        let answer_repository = Arc::new(InMemoryAnswerRepository::new(Arc::clone(&db)));

        let sessions = Arc::new(SessionIssuer::new(
            &SessionConfig {
                secret: TEST_SECRET.to_string(),
                access_token_minutes,
                refresh_token_days,
            },
            Arc::clone(&user_repository) as Arc<dyn auth::UserStore>,
        ));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let question_service = Arc::new(QuestionService::new(
            Arc::clone(&question_repository),
            Arc::clone(&answer_repository),
        ));
        let answer_service = Arc::new(AnswerService::new(
            Arc::clone(&answer_repository),
            Arc::clone(&question_repository),
        ));

        let router = create_router(user_service, question_service, answer_service, sessions);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register an account and return the created user payload.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> serde_json::Value {
        let response = self
            .post("/api/v1/users/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Log in and return the token pair payload.
    pub async fn login(&self, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/v1/users/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Register, log in, and return the access token.
    pub async fn register_and_login(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> String {
        self.register(username, email, password).await;
        let tokens = self.login(email, password).await;
        tokens["access_token"].as_str().unwrap().to_string()
    }

    /// Create a question and return its id.
    pub async fn create_question(&self, text: &str) -> i64 {
        let response = self
            .post("/api/v1/questions")
            .json(&json!({ "text": text }))
            .send()
            .await
            .expect("Failed to execute create question request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().unwrap()
    }
}
