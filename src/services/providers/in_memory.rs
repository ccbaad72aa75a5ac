//! Fixture-backed provider
//!
//! Serves a fixed set of records without any network access. Useful for
//! tests and for exercising the ranking code offline. The `type` filter of a
//! title lookup is not applied.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, SeasonListing},
    services::providers::{LookupQuery, MovieProvider},
};

const MOVIE_NOT_FOUND: &str = "Movie not found!";
const SEASON_NOT_FOUND: &str = "Series or season not found!";

#[derive(Default)]
pub struct InMemoryProvider {
    /// Lowercased title → record
    by_title: HashMap<String, MovieRecord>,
    /// IMDb id → record
    by_id: HashMap<String, MovieRecord>,
    /// (series id, season, episode) → episode record
    episodes: HashMap<(String, String, String), MovieRecord>,
    /// (series id, season) → listing
    seasons: HashMap<(String, String), SeasonListing>,
    /// Lowercased titles and ids that fail as if the transport broke
    unavailable: HashSet<String>,
    lookups: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record under its title and, when present, its id
    pub fn with_movie(mut self, movie: MovieRecord) -> Self {
        if !movie.imdb_id.is_empty() {
            self.by_id.insert(movie.imdb_id.clone(), movie.clone());
        }
        self.by_title.insert(movie.title.to_lowercase(), movie);
        self
    }

    pub fn with_movies(self, movies: impl IntoIterator<Item = MovieRecord>) -> Self {
        movies.into_iter().fold(self, Self::with_movie)
    }

    pub fn with_episode(
        mut self,
        series_id: &str,
        season: &str,
        episode: &str,
        record: MovieRecord,
    ) -> Self {
        self.episodes.insert(
            (series_id.to_string(), season.to_string(), episode.to_string()),
            record,
        );
        self
    }

    pub fn with_season(mut self, series_id: &str, listing: SeasonListing) -> Self {
        self.seasons
            .insert((series_id.to_string(), listing.season.clone()), listing);
        self
    }

    /// Makes lookups of this title or id fail with `UpstreamUnavailable`
    pub fn with_unavailable(mut self, key: &str) -> Self {
        self.unavailable.insert(key.to_lowercase());
        self
    }

    /// Number of `lookup` and `lookup_season` calls served so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self, key: &str) -> AppResult<()> {
        if self.unavailable.contains(&key.to_lowercase()) {
            return Err(AppError::UpstreamUnavailable(
                "failed to call OMDb API".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MovieProvider for InMemoryProvider {
    async fn lookup(&self, query: &LookupQuery) -> AppResult<MovieRecord> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let found = match query {
            LookupQuery::Title { title, .. } => {
                self.check_available(title)?;
                self.by_title.get(&title.to_lowercase())
            }
            LookupQuery::Id {
                imdb_id,
                season: Some(season),
                episode: Some(episode),
            } => {
                self.check_available(imdb_id)?;
                self.episodes
                    .get(&(imdb_id.clone(), season.clone(), episode.clone()))
            }
            LookupQuery::Id { imdb_id, .. } => {
                self.check_available(imdb_id)?;
                self.by_id.get(imdb_id)
            }
        };

        found
            .cloned()
            .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))
    }

    async fn lookup_season(&self, series_id: &str, season: &str) -> AppResult<SeasonListing> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available(series_id)?;

        self.seasons
            .get(&(series_id.to_string(), season.to_string()))
            .cloned()
            .ok_or_else(|| AppError::NotFound(SEASON_NOT_FOUND.to_string()))
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
