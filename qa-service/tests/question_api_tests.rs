mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_question() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/questions")
        .json(&json!({ "text": "What is ownership?" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["text"], "What is ownership?");
    assert_eq!(body["data"]["answers_count"], 0);
    assert!(body["data"]["id"].is_i64());
}

#[tokio::test]
async fn test_create_question_blank_text() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/questions")
        .json(&json!({ "text": "   " }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_questions_with_answer_counts() {
    let app = TestApp::spawn().await;
    let question_id = app.create_question("What is ownership?").await;
    app.create_question("What is borrowing?").await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let response = app
        .post_authenticated("/api/v1/answers", &token)
        .json(&json!({
            "question_id": question_id,
            "text": "Values have a single owner."
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .get("/api/v1/questions")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let questions = body["data"].as_array().unwrap();
    assert_eq!(questions.len(), 2);

    let answered = questions
        .iter()
        .find(|q| q["id"].as_i64() == Some(question_id))
        .expect("Expected the answered question in the listing");
    assert_eq!(answered["answers_count"], 1);
}

#[tokio::test]
async fn test_get_question_with_answers() {
    let app = TestApp::spawn().await;
    let question_id = app.create_question("What is ownership?").await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    app.post_authenticated("/api/v1/answers", &token)
        .json(&json!({
            "question_id": question_id,
            "text": "Values have a single owner."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get(&format!("/api/v1/questions/{}", question_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], question_id);
    let answers = body["data"]["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["text"], "Values have a single owner.");
}

#[tokio::test]
async fn test_get_question_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/questions/999")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_question() {
    let app = TestApp::spawn().await;
    let question_id = app.create_question("Old text").await;

    let response = app
        .put(&format!("/api/v1/questions/{}", question_id))
        .json(&json!({ "text": "New text" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["text"], "New text");
}

#[tokio::test]
async fn test_delete_question_cascades_answers() {
    let app = TestApp::spawn().await;
    let question_id = app.create_question("What is ownership?").await;

    let token = app
        .register_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;
    let response = app
        .post_authenticated("/api/v1/answers", &token)
        .json(&json!({
            "question_id": question_id,
            "text": "Values have a single owner."
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let answer_id = body["data"]["id"].as_i64().unwrap();

    let response = app
        .delete(&format!("/api/v1/questions/{}", question_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .get(&format!("/api/v1/answers/{}", answer_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
