pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::CafeConfig;
use crate::services::CafeStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CafeConfig,
    pub store: Arc<dyn CafeStore>,
}

impl AppState {
    pub fn new(config: CafeConfig, store: Arc<dyn CafeStore>) -> Self {
        Self { config, store }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route(
            "/api/status",
            post(handlers::status::create_status_check)
                .get(handlers::status::list_status_checks),
        )
        .route(
            "/api/reservations",
            post(handlers::reservations::create_reservation)
                .get(handlers::reservations::list_reservations),
        )
        .route(
            "/api/reservations/:id",
            get(handlers::reservations::get_reservation),
        )
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route("/api/menu", get(handlers::menu::get_menu))
        .route_layer(from_fn(metrics_middleware))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            make_request_span(request)
        }))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

/// Credentials are allowed, so a literal `*` is answered by mirroring the
/// request origin; methods and headers are always mirrored.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| tracing::error!("Invalid CORS origin '{}': {}. Skipping.", origin, e))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
