use serde::Deserialize;

use crate::error::AppResult;

/// Stateless client for the movie catalog's search and detail endpoints.
///
/// One outbound call per invocation, authenticated with an `api_key` query
/// parameter. No retries and no caching; timeouts are whatever the shared
/// `reqwest::Client` was built with.
pub struct CatalogClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CatalogClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no TMDB_API_KEY provided, catalog requests will be rejected upstream");
        }
        Self { client, api_key, base_url }
    }

    /// Searches the catalog by title, returning candidates in API order.
    pub async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::debug!(query, results = resp.results.len(), "catalog search");
        Ok(resp.results)
    }

    /// Fetches the full catalog record for one external id.
    pub async fn details(&self, external_id: i64) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), external_id);
        let details: MovieDetails = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(details)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}
