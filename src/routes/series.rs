use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{EpisodeDetails, SeasonDetails, SeriesDetails},
    routes::{missing_required_params, require_param, required, AppState},
    services::series,
};

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonQuery {
    series_title: Option<String>,
    season: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    series_title: Option<String>,
    season: Option<String>,
    episode_number: Option<String>,
}

/// Handler for `GET /api/series?title=...`
pub async fn series_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SeriesQuery>,
) -> AppResult<Json<SeriesDetails>> {
    let title = require_param(params.title, "title")?;

    tracing::info!(request_id = %request_id, title = %title, "Looking up series");

    let series = series::series_details(state.provider.as_ref(), &title).await?;
    Ok(Json(SeriesDetails::from(series)))
}

/// Handler for `GET /api/season?series_title=...&season=...`
pub async fn season_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SeasonQuery>,
) -> AppResult<Json<SeasonDetails>> {
    let (Some(series_title), Some(season)) =
        (required(params.series_title), required(params.season))
    else {
        return Err(missing_required_params());
    };

    tracing::info!(
        request_id = %request_id,
        series_title = %series_title,
        season = %season,
        "Looking up season"
    );

    let details = series::season_details(state.provider.clone(), &series_title, &season).await?;
    Ok(Json(details))
}

/// Handler for `GET /api/episode?series_title=...&season=...&episode_number=...`
pub async fn episode_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<EpisodeQuery>,
) -> AppResult<Json<EpisodeDetails>> {
    let (Some(series_title), Some(season), Some(episode)) = (
        required(params.series_title),
        required(params.season),
        required(params.episode_number),
    ) else {
        return Err(missing_required_params());
    };

    tracing::info!(
        request_id = %request_id,
        series_title = %series_title,
        season = %season,
        episode = %episode,
        "Looking up episode"
    );

    let details =
        series::episode_details(state.provider.as_ref(), &series_title, &season, &episode).await?;
    Ok(Json(details))
}
