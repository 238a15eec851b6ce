#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use cafe_service::config::CafeConfig;
use cafe_service::models::{ContactMessage, Reservation, StatusCheck};
use cafe_service::services::{CafeStore, InMemoryStore};
use cafe_service::{build_router, AppState};
use serde_json::{json, Value};
use service_core::error::AppError;
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_config(CafeConfig::in_memory())
    }

    pub fn with_config(config: CafeConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(config, store.clone());

        TestApp {
            router: build_router(state),
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub fn reservation_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "9876543210",
        "date": "2025-06-14",
        "time": "19:30",
        "guests": 4,
        "special_requests": "Window seat please"
    })
}

pub fn contact_body(message: &str) -> Value {
    json!({
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "message": message
    })
}

/// Store whose every operation fails, standing in for an unreachable database.
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl CafeStore for UnavailableStore {
    async fn insert_status_check(&self, _check: &StatusCheck) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn list_status_checks(&self, _limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        Err(unavailable())
    }

    async fn insert_reservation(&self, _reservation: &Reservation) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn list_reservations(&self, _limit: i64) -> Result<Vec<Reservation>, AppError> {
        Err(unavailable())
    }

    async fn find_reservation(&self, _id: &str) -> Result<Option<Reservation>, AppError> {
        Err(unavailable())
    }

    async fn insert_contact_message(&self, _message: &ContactMessage) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn close(&self) {}
}

pub fn unavailable_router() -> Router {
    build_router(AppState::new(
        CafeConfig::in_memory(),
        Arc::new(UnavailableStore),
    ))
}
