//! Network arena.

use indexmap::IndexMap;

use crate::domain::{Route, Stop};
use crate::error::TransitError;
use crate::provider::{RouteRecord, StopRecord};

/// Every route and stop in the network, keyed by name.
///
/// Both maps iterate in insertion order: routes in the order the data source
/// listed them, stops in the order they were first seen. Routes refer to
/// stops by name and stops refer to routes by name; this struct is the only
/// owner of either.
#[derive(Debug, Clone, Default)]
pub struct Network {
    routes: IndexMap<String, Route>,
    stops: IndexMap<String, Stop>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &IndexMap<String, Route> {
        &self.routes
    }

    pub fn stops(&self) -> &IndexMap<String, Stop> {
        &self.stops
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Look up a stop by its name.
    pub fn get_stop_from_string(&self, name: &str) -> Result<&Stop, TransitError> {
        self.stops
            .get(name)
            .ok_or_else(|| TransitError::UnknownStop(name.to_string()))
    }

    /// Look up a route by its name.
    pub fn get_route_from_string(&self, name: &str) -> Result<&Route, TransitError> {
        self.routes
            .get(name)
            .ok_or_else(|| TransitError::UnknownRoute(name.to_string()))
    }

    /// Register a route under its name.
    ///
    /// A later record with the same name replaces the earlier route but keeps
    /// its position.
    pub(crate) fn insert_route(&mut self, record: RouteRecord) {
        let route = Route::new(record.id, record.name, record.line_name);
        self.routes.insert(route.name().to_string(), route);
    }

    /// Add a stop to the end of `route_name`'s stop list.
    ///
    /// The first mention of a stop name creates the canonical [`Stop`]; later
    /// mentions, from this route or any other, extend its associations.
    pub(crate) fn attach_stop(&mut self, route_name: &str, record: StopRecord) {
        let Some(route) = self.routes.get_mut(route_name) else {
            return;
        };

        let stop = self
            .stops
            .entry(record.name.clone())
            .or_insert_with(|| Stop::new(record.id, record.name));
        stop.associate(route_name);
        route.push_stop(stop.name());
    }
}
