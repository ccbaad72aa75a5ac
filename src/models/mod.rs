mod movie;
mod omdb;
mod responses;

pub use movie::{
    parse_rating, split_list, EpisodeBrief, MovieRecord, SeasonListing, NOT_AVAILABLE,
};
pub use omdb::{OmdbEpisodeBrief, OmdbSeason, OmdbTitle};
pub use responses::{
    BucketEntry, EnrichedEpisode, EpisodeDetails, GenreTopList, MovieDetails,
    RecommendationBuckets, RecommendationItem, RecommendationResponse, SeasonDetails,
    SeriesDetails,
};
