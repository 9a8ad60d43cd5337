//! Fixed-data provider for testing without API access.
//!
//! Serves routes and stops declared in code or loaded from a JSON file of
//! the form:
//!
//! ```json
//! {
//!   "routes": [{ "id": "100", "name": "Green", "line_name": "Green" }],
//!   "stops": { "100": [{ "id": "1", "name": "A" }, { "id": "2", "name": "B" }] }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DataProvider;
use super::error::ProviderError;
use super::records::{RouteRecord, StopRecord};

/// Data provider that serves pre-declared records.
///
/// Routes are returned in declaration order. Asking for the stops of a route
/// id with no declared stops fails with [`ProviderError::UnknownRoute`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureProvider {
    routes: Vec<RouteRecord>,
    #[serde(default)]
    stops: HashMap<String, Vec<StopRecord>>,
}

impl FixtureProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a route.
    pub fn with_route(mut self, route: RouteRecord) -> Self {
        self.routes.push(route);
        self
    }

    /// Declare the stops of the route with `route_id`, replacing any earlier list.
    pub fn with_stops<I>(mut self, route_id: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = StopRecord>,
    {
        self.stops.insert(route_id.into(), stops.into_iter().collect());
        self
    }

    /// Parse a provider from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(json).map_err(|e| ProviderError::Json {
            message: e.to_string(),
        })
    }

    /// Load a provider from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ProviderError::Fixture {
            message: format!("failed to read {:?}: {}", path, e),
        })?;
        Self::from_json(&json)
    }

    /// Declared routes, in order.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }
}

impl DataProvider for FixtureProvider {
    async fn get_all_routes(&self) -> Result<Vec<RouteRecord>, ProviderError> {
        Ok(self.routes.clone())
    }

    async fn get_stops_for_route(&self, route_id: &str) -> Result<Vec<StopRecord>, ProviderError> {
        self.stops
            .get(route_id)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownRoute(route_id.to_string()))
    }
}
