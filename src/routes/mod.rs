use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
};

pub mod movies;
pub mod recommendations;
pub mod series;
mod state;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movie", get(movies::movie_details))
        .route("/movies/genre", get(movies::genre_top))
        .route("/recommend", get(recommendations::recommend))
        .route("/series", get(series::series_details))
        .route("/season", get(series::season_details))
        .route("/episode", get(series::episode_details))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Treats absent and empty query parameters alike
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unwraps a single required parameter or fails with `"Missing <name> query parameter"`
pub(crate) fn require_param(value: Option<String>, name: &str) -> AppResult<String> {
    required(value)
        .ok_or_else(|| AppError::MissingParameter(format!("Missing {} query parameter", name)))
}

pub(crate) fn missing_required_params() -> AppError {
    AppError::MissingParameter("Missing required query parameters".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param() {
        assert_eq!(
            require_param(Some("Heat".to_string()), "title").unwrap(),
            "Heat"
        );
        assert_eq!(
            require_param(Some(String::new()), "title")
                .unwrap_err()
                .to_string(),
            "Missing title query parameter"
        );
        assert!(require_param(None, "genre").is_err());
    }
}
