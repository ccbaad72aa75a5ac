use serde::Serialize;

use crate::models::{parse_rating, EpisodeBrief, MovieRecord};

/// Response for `GET /api/movie`
#[derive(Debug, Serialize)]
pub struct MovieDetails {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Ratings")]
    pub ratings: String,
}

impl From<MovieRecord> for MovieDetails {
    fn from(movie: MovieRecord) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
            plot: movie.plot,
            country: movie.country,
            awards: movie.awards,
            director: movie.director,
            ratings: movie.imdb_rating,
        }
    }
}

/// Response for `GET /api/episode`
#[derive(Debug, Serialize)]
pub struct EpisodeDetails {
    #[serde(rename = "Series")]
    pub series: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Episode")]
    pub episode: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Director")]
    pub director: String,
}

/// Response for `GET /api/series`
#[derive(Debug, Serialize)]
pub struct SeriesDetails {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Total Seasons")]
    pub total_seasons: String,
}

impl From<MovieRecord> for SeriesDetails {
    fn from(series: MovieRecord) -> Self {
        Self {
            title: series.title,
            director: series.director,
            plot: series.plot,
            total_seasons: series.total_seasons,
        }
    }
}

/// Response for `GET /api/season`
#[derive(Debug, Serialize)]
pub struct SeasonDetails {
    #[serde(rename = "Series")]
    pub series: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Episodes")]
    pub episodes: Vec<EnrichedEpisode>,
}

/// A season listing entry with its plot filled in
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedEpisode {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Episode")]
    pub episode: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Plot")]
    pub plot: String,
}

impl EnrichedEpisode {
    /// Sentinel plot used when an episode's own record can't be fetched
    pub const PLOT_UNAVAILABLE: &'static str = "Plot not available";

    /// Merges a listing entry with the episode's full record.
    ///
    /// Release date, episode number and id always come from the listing.
    pub fn from_details(brief: EpisodeBrief, details: MovieRecord) -> Self {
        Self {
            title: details.title,
            released: brief.released,
            episode: brief.episode,
            imdb_rating: details.imdb_rating,
            imdb_id: brief.imdb_id,
            plot: details.plot,
        }
    }

    /// Keeps the listing entry as-is with the sentinel plot
    pub fn without_plot(brief: EpisodeBrief) -> Self {
        Self {
            title: brief.title,
            released: brief.released,
            episode: brief.episode,
            imdb_rating: brief.imdb_rating,
            imdb_id: brief.imdb_id,
            plot: Self::PLOT_UNAVAILABLE.to_string(),
        }
    }
}

/// A single recommended title with the reason it was picked
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    /// Rating text exactly as the provider sent it
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Reason")]
    pub reason: String,
    /// Parsed rating used for ranking, `0.0` when unparsable
    #[serde(skip)]
    pub rating: f64,
}

impl RecommendationItem {
    pub fn new(movie: &MovieRecord, reason: String) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.clone(),
            imdb_rating: movie.imdb_rating.clone(),
            plot: movie.plot.clone(),
            reason,
            rating: parse_rating(&movie.imdb_rating),
        }
    }
}

/// The three ranked recommendation lists for one favorite title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationBuckets {
    pub genre_based: Vec<RecommendationItem>,
    pub director_based: Vec<RecommendationItem>,
    pub actor_based: Vec<RecommendationItem>,
}

/// One entry of the ordered `recommendations` array, e.g. `{"genre_based": [...]}`
#[derive(Debug, Serialize)]
pub enum BucketEntry {
    #[serde(rename = "genre_based")]
    GenreBased(Vec<RecommendationItem>),
    #[serde(rename = "director_based")]
    DirectorBased(Vec<RecommendationItem>),
    #[serde(rename = "actor_based")]
    ActorBased(Vec<RecommendationItem>),
}

/// Response for `GET /api/recommend`
///
/// Buckets are emitted as an array so clients always see genre, then
/// director, then actor.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub favorite_movie: String,
    pub recommendations: Vec<BucketEntry>,
}

impl RecommendationResponse {
    pub fn new(favorite_movie: String, buckets: RecommendationBuckets) -> Self {
        Self {
            favorite_movie,
            recommendations: vec![
                BucketEntry::GenreBased(buckets.genre_based),
                BucketEntry::DirectorBased(buckets.director_based),
                BucketEntry::ActorBased(buckets.actor_based),
            ],
        }
    }
}

/// Response for `GET /api/movies/genre`
#[derive(Debug, Serialize)]
pub struct GenreTopList {
    pub genre: String,
    pub movies: Vec<RecommendationItem>,
}
