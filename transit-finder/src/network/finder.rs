//! Route finding between two stops.
//!
//! The search is a depth-first walk over routes. From the origin it first
//! looks for a single route servicing both stops, then tries each unexplored
//! route at the origin in turn: if that route meets any route servicing the
//! destination, the pair is the answer; otherwise the search recurses from
//! each transfer point along it. The set of explored routes is shared by the
//! whole search, so every route is expanded at most once.
//!
//! The result is *a* connecting sequence, found in a fixed order. It is not
//! necessarily the shortest.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::Stop;

use super::graph::Network;

/// A single route-finding query over a network.
struct RouteFinder<'a> {
    network: &'a Network,
    /// Deepest recursion allowed before giving up on a branch.
    max_depth: usize,
}

impl<'a> RouteFinder<'a> {
    /// A finder whose depth is bounded by the number of routes, since each
    /// level of recursion explores at least one new route.
    fn new(network: &'a Network) -> Self {
        Self::with_max_depth(network, network.route_count())
    }

    fn with_max_depth(network: &'a Network, max_depth: usize) -> Self {
        Self { network, max_depth }
    }

    /// Find route names leading from `origin` to `destination`.
    ///
    /// Returns an empty list when nothing is found. `explored` collects every
    /// route name expanded so far, across all levels of recursion.
    fn search(
        &self,
        origin: &'a Stop,
        destination: &'a Stop,
        explored: &mut HashSet<&'a str>,
        depth: usize,
    ) -> Vec<String> {
        let network = self.network;

        if depth > self.max_depth {
            trace!(stop = origin.name(), depth, "Search depth exceeded");
            return Vec::new();
        }

        // A route servicing both stops needs no transfer.
        for route_name in origin.route_associations() {
            let Some(route) = network.routes().get(route_name) else {
                continue;
            };
            if route.has_stops(origin, destination) {
                return vec![route.name().to_string()];
            }
        }

        for route_name in origin.route_associations() {
            let Some(route) = network.routes().get(route_name) else {
                continue;
            };
            if !explored.insert(route.name()) {
                continue;
            }

            trace!(route = route.name(), from = origin.name(), depth, "Exploring route");

            if let Some(transfer) = network
                .connecting_routes(route)
                .into_iter()
                .find(|name| destination.is_serviced_by(name))
            {
                return vec![route.name().to_string(), transfer.to_string()];
            }

            for stop in network.connecting_stops_on(route) {
                if stop.name() == origin.name() {
                    continue;
                }

                if network.route_serviced_by_same_line_as_stop(route, stop) {
                    trace!(
                        route = route.name(),
                        stop = stop.name(),
                        "Skipping branch of the same line"
                    );
                    explored.extend(stop.route_associations().iter().map(String::as_str));
                    continue;
                }

                let rest = self.search(stop, destination, explored, depth + 1);
                if !rest.is_empty() {
                    let mut itinerary = Vec::with_capacity(rest.len() + 1);
                    itinerary.push(route.name().to_string());
                    itinerary.extend(rest);
                    return itinerary;
                }
            }
        }

        Vec::new()
    }
}

impl Network {
    /// Find a sequence of route names a rider can take from `origin` to
    /// `destination`, changing between consecutive routes.
    ///
    /// An empty result means no itinerary was found under the search's
    /// pruning rules; it is not proof that none exists.
    pub fn get_routes_for_stops<'a>(
        &'a self,
        origin: &'a Stop,
        destination: &'a Stop,
    ) -> Vec<String> {
        let mut explored = HashSet::new();
        let itinerary = RouteFinder::new(self).search(origin, destination, &mut explored, 0);

        debug!(
            origin = origin.name(),
            destination = destination.name(),
            routes = itinerary.len(),
            explored = explored.len(),
            "Route search complete"
        );
        itinerary
    }
}
