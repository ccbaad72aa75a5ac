/// Placeholder OMDb uses for fields it has no data for
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator OMDb uses inside list-valued fields such as `Genre` and `Actors`
const LIST_SEPARATOR: &str = ", ";

/// A title resolved from the upstream provider
///
/// Only successfully resolved titles are represented; a miss is an
/// `AppError::NotFound` carrying the provider's message instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub director: String,
    /// Comma-separated genre list as sent by the provider
    pub genre: String,
    /// Comma-separated actor list as sent by the provider
    pub actors: String,
    /// Rating text, e.g. `"8.4"` or `"N/A"`
    pub imdb_rating: String,
    pub imdb_id: String,
    pub total_seasons: String,
}

impl MovieRecord {
    /// Genres in provider order, without empty or placeholder entries
    pub fn genres(&self) -> Vec<&str> {
        split_list(&self.genre)
    }

    /// Actors in provider order, trimmed, without empty or placeholder entries
    pub fn actor_list(&self) -> Vec<&str> {
        split_list(&self.actors)
    }

    /// Director name trimmed of surrounding whitespace, `None` when unknown
    pub fn known_director(&self) -> Option<&str> {
        let director = self.director.trim();
        if director.is_empty() || director == NOT_AVAILABLE {
            None
        } else {
            Some(director)
        }
    }

    /// Numeric rating, see [`parse_rating`]
    pub fn rating(&self) -> f64 {
        parse_rating(&self.imdb_rating)
    }

    pub fn same_title(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }
}

/// Splits an OMDb list field on `", "`.
///
/// Tokens are trimmed; empty tokens and `N/A` are dropped.
pub fn split_list(field: &str) -> Vec<&str> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != NOT_AVAILABLE)
        .collect()
}

/// Parses a free-text rating, falling back to `0.0`.
///
/// Every ranking in the gateway goes through this so that `"N/A"`, blanks
/// and garbage all sort last together.
pub fn parse_rating(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// One episode entry of a season listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeBrief {
    pub title: String,
    pub released: String,
    pub episode: String,
    pub imdb_rating: String,
    pub imdb_id: String,
}

/// A season of a series as listed by the provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonListing {
    pub title: String,
    pub season: String,
    pub total_seasons: String,
    pub episodes: Vec<EpisodeBrief>,
}
