//! OMDb API provider
//!
//! Plain HTTP GETs against the OMDb root endpoint. OMDb answers misses with a
//! 200 (or 401 for key problems) and an in-band `"Response": "False"`, so the
//! body is decoded regardless of status and the in-band flag decides.

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, OmdbSeason, OmdbTitle, SeasonListing},
    services::providers::{LookupQuery, MovieProvider},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Full parameter list for a request, API key last
    fn request_params(
        &self,
        mut params: Vec<(&'static str, String)>,
    ) -> Vec<(&'static str, String)> {
        params.push(("apikey", self.api_key.clone()));
        params
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.api_url.trim_end_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, params: Vec<(&'static str, String)>) -> AppResult<T> {
        let response = self
            .http_client
            .get(self.endpoint())
            .query(&self.request_params(params))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, response = %body, "Raw OMDb response");

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                status = %status,
                "Failed to deserialize OMDb response"
            );
            AppError::UpstreamUnavailable("failed to decode OMDb response".to_string())
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn lookup(&self, query: &LookupQuery) -> AppResult<MovieRecord> {
        let raw: OmdbTitle = self.get(query.query_pairs()).await?;
        let record = MovieRecord::try_from(raw);

        match &record {
            Ok(movie) => tracing::debug!(
                query = %query,
                title = %movie.title,
                provider = "omdb",
                "Title resolved"
            ),
            Err(e) => tracing::debug!(
                query = %query,
                error = %e,
                provider = "omdb",
                "Title lookup missed"
            ),
        }

        record
    }

    async fn lookup_season(&self, series_id: &str, season: &str) -> AppResult<SeasonListing> {
        let params = vec![("i", series_id.to_string()), ("Season", season.to_string())];
        let raw: OmdbSeason = self.get(params).await?;
        let listing = SeasonListing::try_from(raw)?;

        tracing::info!(
            series_id = %series_id,
            season = %season,
            episodes = listing.episodes.len(),
            provider = "omdb",
            "Season listing fetched"
        );

        Ok(listing)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::redacted;

    fn create_test_provider(api_url: &str) -> OmdbProvider {
        OmdbProvider::new("test_key".to_string(), api_url.to_string())
    }

    #[test]
    fn test_request_params_appends_api_key() {
        let provider = create_test_provider("http://test.local");
        let params = provider.request_params(LookupQuery::series("Breaking Bad").query_pairs());
        assert_eq!(
            params,
            vec![
                ("t", "Breaking Bad".to_string()),
                ("type", "series".to_string()),
                ("apikey", "test_key".to_string())
            ]
        );
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        assert_eq!(
            create_test_provider("http://www.omdbapi.com").endpoint(),
            "http://www.omdbapi.com/"
        );
        assert_eq!(
            create_test_provider("http://www.omdbapi.com/").endpoint(),
            "http://www.omdbapi.com/"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable() {
        // Port 9 (discard) on localhost refuses connections in test environments
        let provider = create_test_provider("http://127.0.0.1:9");
        let err = provider
            .lookup(&LookupQuery::title("The Matrix"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
        assert_eq!(err.to_string(), "failed to call OMDb API");
    }

    #[tokio::test]
    async fn test_transport_error_text_omits_api_key() {
        let provider = OmdbProvider::new(
            "SECRETKEY123".to_string(),
            "http://127.0.0.1:9".to_string(),
        );
        let err = provider
            .http_client
            .get(provider.endpoint())
            .query(&provider.request_params(LookupQuery::title("Heat").query_pairs()))
            .send()
            .await
            .unwrap_err();

        let text = redacted(err);
        assert!(!text.contains("SECRETKEY123"));
        assert!(!text.contains("apikey"));
    }
}
