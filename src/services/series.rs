use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{EnrichedEpisode, EpisodeBrief, EpisodeDetails, MovieRecord, SeasonDetails},
    services::providers::{LookupQuery, MovieProvider},
};

/// Resolves a series by title, restricted to OMDb's `series` type
pub async fn series_details(provider: &dyn MovieProvider, title: &str) -> AppResult<MovieRecord> {
    provider
        .lookup(&LookupQuery::series(title))
        .await
        .map_err(|e| e.prefixed("Series not found"))
}

/// Resolves one episode of a series through the series' IMDb id.
///
/// Season and episode are echoed back exactly as the caller sent them.
pub async fn episode_details(
    provider: &dyn MovieProvider,
    series_title: &str,
    season: &str,
    episode: &str,
) -> AppResult<EpisodeDetails> {
    let series = provider
        .lookup(&LookupQuery::title(series_title))
        .await
        .map_err(|e| e.prefixed("Series not found"))?;

    let details = provider
        .lookup(&LookupQuery::episode(&series.imdb_id, season, episode))
        .await
        .map_err(|e| e.prefixed("Episode not found"))?;

    Ok(EpisodeDetails {
        series: series.title,
        season: season.to_string(),
        episode: episode.to_string(),
        title: details.title,
        year: details.year,
        plot: details.plot,
        director: details.director,
    })
}

/// Lists a season and fills in each episode's plot.
///
/// Episodes whose own record can't be fetched are kept with
/// [`EnrichedEpisode::PLOT_UNAVAILABLE`] as plot.
pub async fn season_details(
    provider: Arc<dyn MovieProvider>,
    series_title: &str,
    season: &str,
) -> AppResult<SeasonDetails> {
    let series = series_details(provider.as_ref(), series_title).await?;

    let listing = provider
        .lookup_season(&series.imdb_id, season)
        .await
        .map_err(|e| e.prefixed("Season not found"))?;

    let episodes = enrich_episodes(provider, listing.episodes).await;

    Ok(SeasonDetails {
        series: series.title,
        season: listing.season,
        episodes,
    })
}

/// Fetches every episode's full record in parallel, keeping listing order
pub async fn enrich_episodes(
    provider: Arc<dyn MovieProvider>,
    episodes: Vec<EpisodeBrief>,
) -> Vec<EnrichedEpisode> {
    let mut tasks = Vec::new();

    for brief in episodes {
        let provider = provider.clone();
        let query = LookupQuery::id(&brief.imdb_id);
        let task = tokio::spawn(async move { provider.lookup(&query).await });
        tasks.push((brief, task));
    }

    let mut enriched = Vec::with_capacity(tasks.len());
    let mut failures = 0usize;

    for (brief, task) in tasks {
        match task.await {
            Ok(Ok(details)) => enriched.push(EnrichedEpisode::from_details(brief, details)),
            Ok(Err(e)) => {
                tracing::warn!(imdb_id = %brief.imdb_id, error = %e, "Episode plot fetch failed");
                failures += 1;
                enriched.push(EnrichedEpisode::without_plot(brief));
            }
            Err(e) => {
                tracing::error!(imdb_id = %brief.imdb_id, error = %e, "Task join error");
                failures += 1;
                enriched.push(EnrichedEpisode::without_plot(brief));
            }
        }
    }

    if failures > 0 {
        tracing::warn!(
            success_count = enriched.len() - failures,
            error_count = failures,
            "Partial episode enrichment failure"
        );
    }

    enriched
}
