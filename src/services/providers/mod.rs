//! Movie metadata provider abstraction
//!
//! The gateway reads every title, episode and season through [`MovieProvider`]
//! so the ranking code never touches HTTP directly. Implementations are
//! stateless and shared across requests behind an `Arc`.

use std::fmt::Display;

use crate::{
    error::AppResult,
    models::{MovieRecord, SeasonListing},
};

pub mod in_memory;
pub mod omdb;

pub use in_memory::InMemoryProvider;
pub use omdb::OmdbProvider;

/// Kind filter for title lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Movie,
    Series,
}

impl TitleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleKind::Movie => "movie",
            TitleKind::Series => "series",
        }
    }
}

/// A single upstream lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// Free-text title, optionally restricted to one kind
    Title {
        title: String,
        kind: Option<TitleKind>,
    },
    /// Stable IMDb id, optionally narrowed to one episode of a series
    Id {
        imdb_id: String,
        season: Option<String>,
        episode: Option<String>,
    },
}

impl LookupQuery {
    pub fn title(title: impl Into<String>) -> Self {
        LookupQuery::Title {
            title: title.into(),
            kind: None,
        }
    }

    pub fn series(title: impl Into<String>) -> Self {
        LookupQuery::Title {
            title: title.into(),
            kind: Some(TitleKind::Series),
        }
    }

    pub fn id(imdb_id: impl Into<String>) -> Self {
        LookupQuery::Id {
            imdb_id: imdb_id.into(),
            season: None,
            episode: None,
        }
    }

    pub fn episode(
        series_id: impl Into<String>,
        season: impl Into<String>,
        episode: impl Into<String>,
    ) -> Self {
        LookupQuery::Id {
            imdb_id: series_id.into(),
            season: Some(season.into()),
            episode: Some(episode.into()),
        }
    }

    /// OMDb query parameters for this lookup, without the API key
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            LookupQuery::Title { title, kind } => {
                let mut pairs = vec![("t", title.clone())];
                if let Some(kind) = kind {
                    pairs.push(("type", kind.as_str().to_string()));
                }
                pairs
            }
            LookupQuery::Id {
                imdb_id,
                season,
                episode,
            } => {
                let mut pairs = vec![("i", imdb_id.clone())];
                if let Some(season) = season {
                    pairs.push(("Season", season.clone()));
                }
                if let Some(episode) = episode {
                    pairs.push(("Episode", episode.clone()));
                }
                pairs
            }
        }
    }
}

impl Display for LookupQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupQuery::Title { title, .. } => write!(f, "t={}", title),
            LookupQuery::Id { imdb_id, .. } => write!(f, "i={}", imdb_id),
        }
    }
}

/// Trait for movie metadata providers
///
/// A miss reported by the provider is `AppError::NotFound` with the provider's
/// message; a transport or decoding failure is `AppError::UpstreamUnavailable`.
/// No retries happen at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Resolve a single title, episode or series
    async fn lookup(&self, query: &LookupQuery) -> AppResult<MovieRecord>;

    /// Fetch the episode listing of one season of a series
    async fn lookup_season(&self, series_id: &str, season: &str) -> AppResult<SeasonListing>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
