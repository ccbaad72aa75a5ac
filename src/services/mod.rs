pub mod candidate_pool;
pub mod genre_top;
pub mod providers;
pub mod recommendations;
pub mod series;

pub use candidate_pool::CandidatePool;
pub use providers::{InMemoryProvider, LookupQuery, MovieProvider, OmdbProvider};
