use crate::{
    error::{AppError, AppResult},
    models::RecommendationItem,
    services::{
        candidate_pool::CandidatePool,
        providers::{LookupQuery, MovieProvider},
        recommendations::rank_by_rating,
    },
};

/// Top-rated pool titles whose genre field contains `genre`, ignoring case.
///
/// Every pool title is resolved; unresolved ones are skipped. Returns
/// `NoMatches` when nothing matches at all.
pub async fn top_by_genre(
    provider: &dyn MovieProvider,
    pool: &CandidatePool,
    genre: &str,
) -> AppResult<Vec<RecommendationItem>> {
    let needle = genre.to_lowercase();
    let mut matches = Vec::new();

    for title in pool.iter() {
        match provider.lookup(&LookupQuery::title(title)).await {
            Ok(movie) if movie.genre.to_lowercase().contains(&needle) => {
                matches.push(RecommendationItem::new(
                    &movie,
                    format!("Genre match: {}", genre),
                ));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(candidate = %title, error = %e, "Skipping unresolved candidate");
            }
        }
    }

    if matches.is_empty() {
        return Err(AppError::NoMatches(format!(
            "No movies found for genre {}",
            genre
        )));
    }

    tracing::info!(genre = %genre, matched = matches.len(), "Genre top list built");

    Ok(rank_by_rating(matches))
}
