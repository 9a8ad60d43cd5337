//! MBTA v3 API client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::DataProvider;
use super::error::ProviderError;
use super::records::{RouteRecord, StopRecord};
use super::types::{Document, RouteResource, StopResource};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Route types to fetch: 0 = light rail, 1 = heavy rail (the subway).
const DEFAULT_ROUTE_TYPES: &str = "0,1";

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// Optional API key for the `x-api-key` header (raises rate limits)
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Comma-separated route type filter
    pub route_types: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a config for the production API without a key.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            route_types: DEFAULT_ROUTE_TYPES.to_string(),
            timeout_secs: 30,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_route_types(mut self, route_types: impl Into<String>) -> Self {
        self.route_types = route_types.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the MBTA v3 API.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
    route_types: String,
}

impl MbtaClient {
    /// Create a new MBTA API client.
    pub fn new(config: MbtaConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| ProviderError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            route_types: config.route_types,
        })
    }

    /// GET `{base_url}/{resource}` and return the document's `data` list.
    async fn fetch_data<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let document: Document<T> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Json {
                message: e.to_string(),
            })?;

        Ok(document.data)
    }
}

impl DataProvider for MbtaClient {
    async fn get_all_routes(&self) -> Result<Vec<RouteRecord>, ProviderError> {
        let routes: Vec<RouteResource> = self
            .fetch_data("routes", &[("filter[type]", self.route_types.as_str())])
            .await?;

        debug!(routes = routes.len(), "Fetched routes");
        Ok(routes.into_iter().map(RouteRecord::from).collect())
    }

    async fn get_stops_for_route(&self, route_id: &str) -> Result<Vec<StopRecord>, ProviderError> {
        let stops: Vec<StopResource> = self
            .fetch_data("stops", &[("filter[route]", route_id)])
            .await?;

        debug!(route_id, stops = stops.len(), "Fetched stops");
        Ok(stops.into_iter().map(StopRecord::from).collect())
    }
}
