mod common;

use axum::http::StatusCode;
use common::{contact_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn ten_character_message_is_accepted() {
    let app = TestApp::spawn();

    let response = app.post_json("/api/contact", &contact_body("exactly 10")).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["message"], "exactly 10");
    assert_eq!(body["name"], "Grace Hopper");
    assert!(body["id"].as_str().is_some());
    assert!(body["created_at"].as_str().is_some());

    let stored = app.store.contact_messages().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, body["id"].as_str().unwrap());
}

#[tokio::test]
async fn short_message_is_rejected() {
    let app = TestApp::spawn();

    let response = app.post_json("/api/contact", &contact_body("too short")).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json()["details"]
        .as_str()
        .unwrap()
        .contains("message"));
    assert!(app.store.contact_messages().unwrap().is_empty());
}

#[tokio::test]
async fn long_message_and_bad_email_are_rejected() {
    let app = TestApp::spawn();

    let response = app
        .post_json("/api/contact", &contact_body(&"m".repeat(1001)))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let mut body = contact_body("Do you host private events?");
    body["email"] = json!("grace-at-example");
    let response = app.post_json("/api/contact", &body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json()["details"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn contact_messages_have_no_read_endpoint() {
    let app = TestApp::spawn();

    let response = app.get("/api/contact").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
