//! Brave Search API client.
//!
//! Owns one lazily-created HTTP session per client, shapes requests for the
//! `/web/search` endpoint and maps provider failures onto [`SearchError`].

use async_trait::async_trait;
use brave_search::{
    ConfigError, SearchError, SearchRequest, SearchResult, WebSearchResponse, WebSearchService,
    API_KEY_ENV,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, instrument, trace};

const BASE_URL: &str = "https://api.search.brave.com/res/v1";
const SUBSCRIPTION_TOKEN_HEADER: &str = "x-subscription-token";

/// Total request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the Brave Search API.
pub struct BraveSearchClient {
    api_key: HeaderValue,
    timeout: Duration,
    base_url: String,
    session: Mutex<Option<Client>>,
}

impl BraveSearchClient {
    /// Creates a client, falling back to `BRAVE_SEARCH_API_KEY` when no key is given.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let api_key = resolve_api_key(api_key, std::env::var(API_KEY_ENV).ok())?;
        let mut api_key =
            HeaderValue::from_str(&api_key).map_err(|_| ConfigError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        Ok(Self {
            api_key,
            timeout,
            base_url: BASE_URL.to_string(),
            session: Mutex::new(None),
        })
    }

    /// Overrides the API base URL (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg(test)]
    async fn has_session(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// Releases the HTTP session. Safe to call repeatedly; the next search
    /// opens a fresh one.
    pub async fn close(&self) {
        if self.session.lock().await.take().is_some() {
            debug!("Closed Brave Search HTTP session");
        }
    }

    /// Returns the live session, creating it on first use.
    ///
    /// The lock is held across creation so concurrent first calls build a
    /// single session.
    async fn ensure_session(&self) -> Result<Client, SearchError> {
        let mut session = self.session.lock().await;
        if let Some(client) = session.as_ref() {
            return Ok(client.clone());
        }

        let client = self.build_session()?;
        debug!(timeout_secs = self.timeout.as_secs_f64(), "Opened Brave Search HTTP session");
        *session = Some(client.clone());
        Ok(client)
    }

    fn build_session(&self) -> Result<Client, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        headers.insert(SUBSCRIPTION_TOKEN_HEADER, self.api_key.clone());

        Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP session");
                SearchError::transport(e)
            })
    }

    async fn perform_search(
        &self,
        request: &SearchRequest,
    ) -> Result<WebSearchResponse, SearchError> {
        let session = self.ensure_session().await?;
        let url = format!("{}/web/search", self.base_url);
        let params = build_query_params(request);

        debug!(url = %url, "Sending search request to Brave");
        trace!(params = ?params, "Search parameters");

        let response = session
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, timeout = e.is_timeout(), "Network error during Brave request");
                SearchError::transport(e)
            })?;

        let status = response.status();
        debug!(status = %status, "Received response from Brave");

        if status == StatusCode::UNAUTHORIZED {
            error!(status = status.as_u16(), "Unauthorized request");
            return Err(SearchError::Authentication);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            error!(status = status.as_u16(), "Rate limit exceeded");
            return Err(SearchError::RateLimited);
        }

        if status.as_u16() >= 400 {
            let body = response.text().await.map_err(|e| {
                error!(error = %e, "Failed to read error body");
                SearchError::transport(e)
            })?;
            error!(status = status.as_u16(), body = %body, "Brave Search API error");
            return Err(map_http_error(status, &body));
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode Brave response");
            SearchError::transport(e)
        })?;

        let results = extract_results(&payload);
        debug!(result_count = results.len(), "Search completed successfully");

        Ok(WebSearchResponse::new(request.query.clone(), results))
    }
}

#[async_trait]
impl WebSearchService for BraveSearchClient {
    #[instrument(skip(self, request), fields(query = %request.query, count = request.effective_count()))]
    async fn search(&self, request: &SearchRequest) -> Result<WebSearchResponse, SearchError> {
        self.perform_search(request).await
    }
}

// ============================================
// Helper Functions
// ============================================

/// Picks the explicit key, else the environment value. Empty strings count
/// as missing.
fn resolve_api_key(explicit: Option<String>, env: Option<String>) -> Result<String, ConfigError> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| env.filter(|key| !key.is_empty()))
        .ok_or(ConfigError::MissingApiKey)
}

fn build_query_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", request.query.clone()),
        ("count", request.effective_count().to_string()),
        ("safesearch", request.safesearch.clone()),
        ("country", request.country.clone()),
    ];
    if let Some(freshness) = request.effective_freshness() {
        params.push(("freshness", freshness.to_string()));
    }
    params
}

/// Maps `web.results` onto ranked results.
///
/// Missing or malformed nesting yields no results. Per item, a missing or
/// non-string `title`, `url` or `description` becomes `""` and `age` is kept
/// only when it is a string. Positions are assigned from the returned order.
fn extract_results(root: &Value) -> Vec<SearchResult> {
    let Some(items) = root
        .get("web")
        .and_then(|web| web.get("results"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| SearchResult {
            position: (index + 1) as u32,
            title: string_field(item, "title"),
            url: string_field(item, "url"),
            description: string_field(item, "description"),
            age: item.get("age").and_then(Value::as_str).map(str::to_string),
        })
        .collect()
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn map_http_error(status: StatusCode, body: &str) -> SearchError {
    let details = if body.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_string())))
    };

    let message = details
        .as_ref()
        .and_then(|json| json.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    SearchError::Provider {
        status: status.as_u16(),
        message,
        details,
    }
}
