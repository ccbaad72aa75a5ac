use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::RecommendationResponse,
    routes::{require_param, AppState},
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    favorite_movie: Option<String>,
}

/// Handler for `GET /api/recommend?favorite_movie=...`
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let favorite = require_param(params.favorite_movie, "favorite_movie")?;

    tracing::info!(
        request_id = %request_id,
        favorite_movie = %favorite,
        "Processing recommendation request"
    );

    let result =
        recommendations::recommend(state.provider.as_ref(), &state.pool, &favorite).await?;

    tracing::info!(request_id = %request_id, "Recommendation completed");

    Ok(Json(RecommendationResponse::new(
        result.favorite.title,
        result.buckets,
    )))
}
