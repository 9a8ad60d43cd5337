//! Transfer points between routes.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::domain::{Route, Stop};

use super::graph::Network;

impl Network {
    /// Every connecting stop, mapped to the routes that service it.
    ///
    /// Stops appear in discovery order.
    pub fn get_connecting_stops(&self) -> IndexMap<&str, &[String]> {
        self.stops()
            .values()
            .filter(|stop| stop.is_connecting())
            .map(|stop| (stop.name(), stop.route_associations()))
            .collect()
    }

    /// The connecting stops on `route`, in route order.
    pub fn connecting_stops_on(&self, route: &Route) -> Vec<&Stop> {
        route
            .stops()
            .iter()
            .filter_map(|name| self.stops().get(name))
            .filter(|stop| stop.is_connecting())
            .collect()
    }

    /// Names of the other routes a rider can change to from `route`.
    ///
    /// Each name appears once, in the order first met walking the route's
    /// connecting stops.
    pub fn connecting_routes(&self, route: &Route) -> Vec<&str> {
        let mut names = IndexSet::new();
        for stop in self.connecting_stops_on(route) {
            for name in stop.route_associations() {
                if name != route.name() {
                    names.insert(name.as_str());
                }
            }
        }
        names.into_iter().collect()
    }

    /// Whether every route at `stop` belongs to the same line as `route`.
    ///
    /// Such a stop only links branches of one line, so changing there opens
    /// up nothing new. A route with no line name is on no line, and never
    /// matches.
    pub fn route_serviced_by_same_line_as_stop(&self, route: &Route, stop: &Stop) -> bool {
        let Some(line) = route.line_name() else {
            return false;
        };

        let mut lines = HashSet::new();
        for name in stop.route_associations() {
            match self.routes().get(name).and_then(Route::line_name) {
                Some(other) => {
                    lines.insert(other);
                }
                None => return false,
            }
        }

        lines.len() == 1 && lines.contains(line)
    }
}
