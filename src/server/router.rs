use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use super::cafes;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Shared secret gating cafe deletion.
    pub api_key: String,
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(cafes::home))
        .route("/health", get(health))
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(cafes::search_cafes))
        .route("/add", post(cafes::add_cafe))
        .route("/update_price/{cafe_id}", patch(cafes::update_price))
        .route("/report_closed/{cafe_id}", delete(cafes::report_closed))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
