use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{EpisodeBrief, MovieRecord, SeasonListing},
};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw title payload from `GET /?t=...` or `GET /?i=...`
///
/// OMDb reports misses in-band: `Response` is `"False"` and `Error` carries
/// the reason, with every other field absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbTitle {
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
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: String,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: String,
}

/// Raw season listing from `GET /?i=<series>&Season=<n>`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbSeason {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: String,
    #[serde(rename = "Episodes")]
    pub episodes: Vec<OmdbEpisodeBrief>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbEpisodeBrief {
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
}

fn is_miss(response: &str) -> bool {
    response == "False"
}

impl TryFrom<OmdbTitle> for MovieRecord {
    type Error = AppError;

    fn try_from(raw: OmdbTitle) -> AppResult<Self> {
        if is_miss(&raw.response) {
            return Err(AppError::NotFound(raw.error));
        }

        Ok(MovieRecord {
            title: raw.title,
            year: raw.year,
            plot: raw.plot,
            country: raw.country,
            awards: raw.awards,
            director: raw.director,
            genre: raw.genre,
            actors: raw.actors,
            imdb_rating: raw.imdb_rating,
            imdb_id: raw.imdb_id,
            total_seasons: raw.total_seasons,
        })
    }
}

impl From<OmdbEpisodeBrief> for EpisodeBrief {
    fn from(raw: OmdbEpisodeBrief) -> Self {
        EpisodeBrief {
            title: raw.title,
            released: raw.released,
            episode: raw.episode,
            imdb_rating: raw.imdb_rating,
            imdb_id: raw.imdb_id,
        }
    }
}

impl TryFrom<OmdbSeason> for SeasonListing {
    type Error = AppError;

    fn try_from(raw: OmdbSeason) -> AppResult<Self> {
        if is_miss(&raw.response) {
            return Err(AppError::NotFound(raw.error));
        }

        Ok(SeasonListing {
            title: raw.title,
            season: raw.season,
            total_seasons: raw.total_seasons,
            episodes: raw.episodes.into_iter().map(EpisodeBrief::from).collect(),
        })
    }
}
