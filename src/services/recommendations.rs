use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{MovieRecord, RecommendationBuckets, RecommendationItem},
    services::{
        candidate_pool::CandidatePool,
        providers::{LookupQuery, MovieProvider},
    },
};

/// Upper bound on the size of every ranked list
pub const MAX_BUCKET_SIZE: usize = 15;

/// Relation used to pick the titles of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Genre,
    Director,
    Actor,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Genre => "genre",
            Bucket::Director => "director",
            Bucket::Actor => "actor",
        }
    }
}

/// Titles already placed in some bucket during one request.
///
/// Comparison ignores case.
#[derive(Debug, Default)]
pub struct SeenSet {
    titles: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(&title.to_lowercase())
    }

    /// Returns `false` if the title was already present
    pub fn insert(&mut self, title: &str) -> bool {
        self.titles.insert(title.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Decides whether a candidate belongs in a bucket.
///
/// Matchers are built from the reference movie once and then asked about
/// each candidate in pool order.
pub trait Matcher: Send + Sync {
    fn bucket(&self) -> Bucket;

    /// `false` when the reference carries nothing to match on
    fn has_criteria(&self) -> bool;

    /// Human-readable reason when the candidate matches, naming what matched
    fn reason(&self, candidate: &MovieRecord) -> Option<String>;
}

/// Matches when any reference genre appears in the candidate's genre field.
///
/// Reference genres are tried in order; the first hit names the reason.
pub struct GenreMatcher {
    genres: Vec<String>,
}

impl GenreMatcher {
    pub fn new(reference: &MovieRecord) -> Self {
        Self {
            genres: reference.genres().into_iter().map(str::to_string).collect(),
        }
    }
}

impl Matcher for GenreMatcher {
    fn bucket(&self) -> Bucket {
        Bucket::Genre
    }

    fn has_criteria(&self) -> bool {
        !self.genres.is_empty()
    }

    fn reason(&self, candidate: &MovieRecord) -> Option<String> {
        let field = candidate.genre.to_lowercase();
        self.genres
            .iter()
            .find(|genre| field.contains(&genre.to_lowercase()))
            .map(|genre| format!("Same genre: {}", genre))
    }
}

/// Matches on an identical director, ignoring case and surrounding whitespace
pub struct DirectorMatcher {
    /// Trimmed and lowercased, `None` when the reference has no director
    director: Option<String>,
    /// As the provider sent it, used verbatim in the reason
    display: String,
}

impl DirectorMatcher {
    pub fn new(reference: &MovieRecord) -> Self {
        Self {
            director: reference.known_director().map(str::to_lowercase),
            display: reference.director.clone(),
        }
    }
}

impl Matcher for DirectorMatcher {
    fn bucket(&self) -> Bucket {
        Bucket::Director
    }

    fn has_criteria(&self) -> bool {
        self.director.is_some()
    }

    fn reason(&self, candidate: &MovieRecord) -> Option<String> {
        let director = self.director.as_deref()?;
        let candidate_director = candidate.known_director()?;

        (candidate_director.to_lowercase() == director)
            .then(|| format!("Same director: {}", self.display))
    }
}

/// Matches when any reference actor appears in the candidate's cast field
pub struct ActorMatcher {
    actors: Vec<String>,
}

impl ActorMatcher {
    pub fn new(reference: &MovieRecord) -> Self {
        Self {
            actors: reference
                .actor_list()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Matcher for ActorMatcher {
    fn bucket(&self) -> Bucket {
        Bucket::Actor
    }

    fn has_criteria(&self) -> bool {
        !self.actors.is_empty()
    }

    fn reason(&self, candidate: &MovieRecord) -> Option<String> {
        let field = candidate.actors.to_lowercase();
        self.actors
            .iter()
            .find(|actor| field.contains(&actor.to_lowercase()))
            .map(|actor| format!("Shared actor: {}", actor))
    }
}

/// Result of a recommendation request
#[derive(Debug, Clone)]
pub struct Recommendations {
    /// The favorite movie as resolved upstream
    pub favorite: MovieRecord,
    pub buckets: RecommendationBuckets,
}

/// Builds genre, director and actor recommendations for a favorite title.
///
/// The three buckets are filled one after another over the same pool and
/// share one [`SeenSet`], so a title lands in the first bucket it qualifies
/// for. Each bucket is then ranked by rating and capped at
/// [`MAX_BUCKET_SIZE`].
///
/// Fails only when the favorite itself can't be resolved; candidate lookup
/// failures just drop that candidate.
pub async fn recommend(
    provider: &dyn MovieProvider,
    pool: &CandidatePool,
    favorite: &str,
) -> AppResult<Recommendations> {
    let reference = provider.lookup(&LookupQuery::title(favorite)).await?;

    tracing::info!(
        favorite = %reference.title,
        genre = %reference.genre,
        director = %reference.director,
        pool_size = pool.len(),
        provider = provider.name(),
        "Building recommendations"
    );

    let mut seen = SeenSet::new();

    let genre_based = fill_bucket(
        provider,
        pool,
        &reference,
        &GenreMatcher::new(&reference),
        &mut seen,
    )
    .await;
    let director_based = fill_bucket(
        provider,
        pool,
        &reference,
        &DirectorMatcher::new(&reference),
        &mut seen,
    )
    .await;
    let actor_based = fill_bucket(
        provider,
        pool,
        &reference,
        &ActorMatcher::new(&reference),
        &mut seen,
    )
    .await;

    let buckets = RecommendationBuckets {
        genre_based: rank_by_rating(genre_based),
        director_based: rank_by_rating(director_based),
        actor_based: rank_by_rating(actor_based),
    };

    tracing::info!(
        favorite = %reference.title,
        genre_based = buckets.genre_based.len(),
        director_based = buckets.director_based.len(),
        actor_based = buckets.actor_based.len(),
        "Recommendations built"
    );

    Ok(Recommendations {
        favorite: reference,
        buckets,
    })
}

/// Walks the pool in order and collects matches for one bucket.
///
/// Lookups are sequential: the seen check and mark for a title must happen in
/// pool order for the first match to win. Stops walking once the bucket is
/// full.
pub async fn fill_bucket(
    provider: &dyn MovieProvider,
    pool: &CandidatePool,
    reference: &MovieRecord,
    matcher: &dyn Matcher,
    seen: &mut SeenSet,
) -> Vec<RecommendationItem> {
    let bucket = matcher.bucket().as_str();
    let mut items = Vec::new();

    if !matcher.has_criteria() {
        tracing::debug!(bucket, "Reference has nothing to match on, skipping bucket");
        return items;
    }

    for title in pool.iter() {
        if items.len() >= MAX_BUCKET_SIZE {
            break;
        }

        let candidate = match provider.lookup(&LookupQuery::title(title)).await {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::debug!(
                    bucket,
                    candidate = %title,
                    error = %e,
                    "Skipping unresolved candidate"
                );
                continue;
            }
        };

        if candidate.same_title(&reference.title) || seen.contains(&candidate.title) {
            continue;
        }

        if let Some(reason) = matcher.reason(&candidate) {
            seen.insert(&candidate.title);
            items.push(RecommendationItem::new(&candidate, reason));
        }
    }

    tracing::debug!(bucket, matched = items.len(), seen = seen.len(), "Bucket filled");
    items
}

/// Sorts by rating, highest first, and caps at [`MAX_BUCKET_SIZE`].
///
/// The sort is stable so equal ratings keep discovery order.
pub fn rank_by_rating(mut items: Vec<RecommendationItem>) -> Vec<RecommendationItem> {
    items.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    items.truncate(MAX_BUCKET_SIZE);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::{InMemoryProvider, MockMovieProvider};

    fn movie(title: &str, genre: &str, director: &str, actors: &str, rating: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: "2000".to_string(),
            plot: format!("{} plot", title),
            genre: genre.to_string(),
            director: director.to_string(),
            actors: actors.to_string(),
            imdb_rating: rating.to_string(),
            ..Default::default()
        }
    }

    fn pool(titles: &[&str]) -> CandidatePool {
        CandidatePool::new(titles.iter().map(|t| t.to_string()))
    }

    fn titles(items: &[RecommendationItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn dark_knight() -> MovieRecord {
        movie(
            "The Dark Knight",
            "Action, Crime, Drama",
            "Christopher Nolan",
            "Christian Bale, Heath Ledger, Aaron Eckhart",
            "9.0",
        )
    }

    #[tokio::test]
    async fn test_title_matching_genre_and_director_only_in_genre_bucket() {
        let provider = InMemoryProvider::new().with_movies(vec![
            dark_knight(),
            movie(
                "The Dark Knight Rises",
                "Action, Drama, Thriller",
                "Christopher Nolan",
                "Christian Bale, Tom Hardy",
                "8.4",
            ),
            movie(
                "Memento",
                "Mystery, Thriller",
                "Christopher Nolan",
                "Guy Pearce",
                "8.4",
            ),
        ]);

        let result = recommend(
            &provider,
            &pool(&["The Dark Knight Rises", "Memento"]),
            "The Dark Knight",
        )
        .await
        .unwrap();

        let buckets = result.buckets;
        assert_eq!(titles(&buckets.genre_based), vec!["The Dark Knight Rises"]);
        assert_eq!(buckets.genre_based[0].reason, "Same genre: Action");
        assert_eq!(titles(&buckets.director_based), vec!["Memento"]);
        assert_eq!(
            buckets.director_based[0].reason,
            "Same director: Christopher Nolan"
        );
        assert!(buckets.actor_based.is_empty());
    }

    #[tokio::test]
    async fn test_reference_never_recommended() {
        let provider = InMemoryProvider::new().with_movies(vec![
            dark_knight(),
            movie("Heat", "Action, Crime", "Michael Mann", "Al Pacino", "8.3"),
        ]);

        let result = recommend(
            &provider,
            &pool(&["The Dark Knight", "the dark knight", "Heat"]),
            "the DARK knight",
        )
        .await
        .unwrap();

        assert_eq!(result.favorite.title, "The Dark Knight");
        let buckets = result.buckets;
        for bucket in [
            &buckets.genre_based,
            &buckets.director_based,
            &buckets.actor_based,
        ] {
            assert!(bucket.iter().all(|i| i.title != "The Dark Knight"));
        }
        assert_eq!(titles(&buckets.genre_based), vec!["Heat"]);
    }

    #[tokio::test]
    async fn test_no_title_in_two_buckets() {
        let provider = InMemoryProvider::new().with_movies(vec![
            dark_knight(),
            movie("Batman Begins", "Action, Crime", "Christopher Nolan", "Christian Bale", "8.2"),
            movie("The Prestige", "Mystery, Sci-Fi", "Christopher Nolan", "Christian Bale", "8.5"),
            movie("American Psycho", "Horror", "Mary Harron", "Christian Bale", "7.6"),
        ]);

        let result = recommend(
            &provider,
            &pool(&["Batman Begins", "The Prestige", "American Psycho", "Batman Begins"]),
            "The Dark Knight",
        )
        .await
        .unwrap();

        let buckets = result.buckets;
        assert_eq!(titles(&buckets.genre_based), vec!["Batman Begins"]);
        assert_eq!(titles(&buckets.director_based), vec!["The Prestige"]);
        assert_eq!(titles(&buckets.actor_based), vec!["American Psycho"]);
        assert_eq!(buckets.actor_based[0].reason, "Shared actor: Christian Bale");
    }

    #[tokio::test]
    async fn test_genre_bucket_capped_in_pool_order() {
        let mut movies = vec![dark_knight()];
        let mut names = Vec::new();
        for i in 0..20 {
            let name = format!("Action Movie {}", i);
            let rating = format!("{}.0", i % 10);
            movies.push(movie(&name, "Action", "Someone", "Nobody", &rating));
            names.push(name);
        }
        let provider = InMemoryProvider::new().with_movies(movies);
        let pool = CandidatePool::new(names);

        let result = recommend(&provider, &pool, "The Dark Knight").await.unwrap();
        let genre = result.buckets.genre_based;

        assert_eq!(genre.len(), MAX_BUCKET_SIZE);
        // Candidates past the cap are never considered, even with better ratings
        assert!(genre.iter().all(|i| i.title != "Action Movie 19"));
    }

    fn crowded_pool(director: &str, actors: &str) -> (InMemoryProvider, CandidatePool) {
        let mut movies = vec![dark_knight()];
        let mut names = Vec::new();
        for i in 0..20 {
            let name = format!("Western {}", i);
            movies.push(movie(&name, "Western", director, actors, "7.0"));
            names.push(name);
        }
        (
            InMemoryProvider::new().with_movies(movies),
            CandidatePool::new(names),
        )
    }

    #[tokio::test]
    async fn test_director_bucket_capped() {
        let (provider, pool) = crowded_pool("Christopher Nolan", "Nobody");

        let buckets = recommend(&provider, &pool, "The Dark Knight")
            .await
            .unwrap()
            .buckets;

        assert!(buckets.genre_based.is_empty());
        assert_eq!(buckets.director_based.len(), MAX_BUCKET_SIZE);
        assert!(buckets
            .director_based
            .iter()
            .all(|i| i.title != "Western 15"));
        assert!(buckets.actor_based.is_empty());
    }

    #[tokio::test]
    async fn test_actor_bucket_capped() {
        let (provider, pool) = crowded_pool("Someone Else", "Heath Ledger, Someone");

        let buckets = recommend(&provider, &pool, "The Dark Knight")
            .await
            .unwrap()
            .buckets;

        assert!(buckets.genre_based.is_empty());
        assert!(buckets.director_based.is_empty());
        assert_eq!(buckets.actor_based.len(), MAX_BUCKET_SIZE);
        assert_eq!(buckets.actor_based[0].reason, "Shared actor: Heath Ledger");
    }

    #[tokio::test]
    async fn test_buckets_sorted_by_rating_with_stable_ties() {
        let provider = InMemoryProvider::new().with_movies(vec![
            dark_knight(),
            movie("First Tie", "Crime", "A", "X", "7.5"),
            movie("Unrated", "Crime", "A", "X", "N/A"),
            movie("Best", "Drama", "A", "X", "8.9"),
            movie("Second Tie", "Action", "A", "X", "7.5"),
        ]);

        let result = recommend(
            &provider,
            &pool(&["First Tie", "Unrated", "Best", "Second Tie"]),
            "The Dark Knight",
        )
        .await
        .unwrap();

        assert_eq!(
            titles(&result.buckets.genre_based),
            vec!["Best", "First Tie", "Second Tie", "Unrated"]
        );
    }

    #[tokio::test]
    async fn test_reference_without_data_yields_empty_buckets() {
        let provider = InMemoryProvider::new().with_movies(vec![
            movie("Obscure Short", "N/A", "N/A", "N/A", "N/A"),
            movie("Other Short", "N/A", "N/A", "N/A", "N/A"),
            movie("Heat", "Action, Crime", "Michael Mann", "Al Pacino", "8.3"),
        ]);

        let result = recommend(
            &provider,
            &pool(&["Other Short", "Heat"]),
            "Obscure Short",
        )
        .await
        .unwrap();

        assert_eq!(result.buckets, RecommendationBuckets::default());
        // Only the favorite is looked up
        assert_eq!(provider.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_unresolved_candidates_are_skipped() {
        let provider = InMemoryProvider::new()
            .with_movies(vec![
                dark_knight(),
                movie("Heat", "Action, Crime", "Michael Mann", "Al Pacino", "8.3"),
                movie("Collateral", "Crime, Drama", "Michael Mann", "Tom Cruise", "7.5"),
            ])
            .with_unavailable("Collateral");

        let result = recommend(
            &provider,
            &pool(&["Not A Real Movie", "Collateral", "Heat"]),
            "The Dark Knight",
        )
        .await
        .unwrap();

        assert_eq!(titles(&result.buckets.genre_based), vec!["Heat"]);
    }

    #[tokio::test]
    async fn test_favorite_lookup_failure_aborts() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_lookup()
            .times(1)
            .returning(|_| Err(AppError::NotFound("Movie not found!".to_string())));

        let err = recommend(&provider, &pool(&["Heat", "Collateral"]), "Nope")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Movie not found!"));
    }

    #[tokio::test]
    async fn test_favorite_transport_failure_aborts() {
        let provider = InMemoryProvider::new()
            .with_movie(dark_knight())
            .with_unavailable("The Dark Knight");

        let err = recommend(&provider, &pool(&["Heat"]), "The Dark Knight")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_genre_matcher_is_case_insensitive_substring() {
        let matcher = GenreMatcher::new(&movie("Ref", "Sci-Fi, Drama", "", "", ""));
        let candidate = movie("Cand", "Action, SCI-FI", "", "", "");
        assert_eq!(
            matcher.reason(&candidate),
            Some("Same genre: Sci-Fi".to_string())
        );
        assert_eq!(matcher.reason(&movie("Cand", "Comedy", "", "", "")), None);
    }

    #[test]
    fn test_director_matcher_trims_but_reports_untrimmed() {
        let matcher = DirectorMatcher::new(&movie("Ref", "", " Michael Mann ", "", ""));
        let candidate = movie("Cand", "", "michael mann", "", "");
        assert_eq!(
            matcher.reason(&candidate),
            Some("Same director:  Michael Mann ".to_string())
        );
    }

    #[test]
    fn test_director_matcher_ignores_unknown_directors() {
        let matcher = DirectorMatcher::new(&movie("Ref", "", "N/A", "", ""));
        assert!(!matcher.has_criteria());
        assert_eq!(matcher.reason(&movie("Cand", "", "N/A", "", "")), None);
    }

    #[test]
    fn test_actor_matcher_reports_first_listed_actor() {
        let matcher = ActorMatcher::new(&movie("Ref", "", "", "Al Pacino, Robert De Niro", ""));
        let candidate = movie("Cand", "", "", "Robert De Niro, Al Pacino", "");
        assert_eq!(
            matcher.reason(&candidate),
            Some("Shared actor: Al Pacino".to_string())
        );
    }

    #[test]
    fn test_rank_by_rating_truncates() {
        let items: Vec<RecommendationItem> = (0..20)
            .map(|i| {
                RecommendationItem::new(
                    &movie(&format!("M{}", i), "", "", "", &format!("{}", i)),
                    "r".to_string(),
                )
            })
            .collect();

        let ranked = rank_by_rating(items);
        assert_eq!(ranked.len(), MAX_BUCKET_SIZE);
        assert_eq!(ranked[0].title, "M19");
        assert_eq!(ranked[14].title, "M5");
    }

    #[test]
    fn test_seen_set_ignores_case() {
        let mut seen = SeenSet::new();
        assert!(seen.is_empty());
        assert!(seen.insert("Heat"));
        assert!(seen.contains("HEAT"));
        assert!(!seen.insert("heat"));
        assert_eq!(seen.len(), 1);
    }
}
