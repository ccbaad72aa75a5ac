use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{GenreTopList, MovieDetails},
    routes::{require_param, AppState},
    services::{genre_top, LookupQuery},
};

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    genre: Option<String>,
}

/// Handler for `GET /api/movie?title=...`
pub async fn movie_details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<MovieDetails>> {
    let title = require_param(params.title, "title")?;

    tracing::info!(request_id = %request_id, title = %title, "Looking up movie");

    let movie = state.provider.lookup(&LookupQuery::title(title)).await?;
    Ok(Json(MovieDetails::from(movie)))
}

/// Handler for `GET /api/movies/genre?genre=...`
pub async fn genre_top(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenreQuery>,
) -> AppResult<Json<GenreTopList>> {
    let genre = require_param(params.genre, "genre")?;

    tracing::info!(request_id = %request_id, genre = %genre, "Building genre top list");

    let movies = genre_top::top_by_genre(state.provider.as_ref(), &state.pool, &genre).await?;
    Ok(Json(GenreTopList { genre, movies }))
}
