//! Transit data sources.
//!
//! The network is built from a [`DataProvider`], which lists routes and the
//! stops on each route. [`MbtaClient`] talks to the MBTA v3 API;
//! [`FixtureProvider`] serves fixed data for tests and offline use.

mod error;
mod fixture;
mod mbta;
mod records;
mod types;

use std::future::Future;

pub use error::ProviderError;
pub use fixture::FixtureProvider;
pub use mbta::{MbtaClient, MbtaConfig};
pub use records::{RouteRecord, StopRecord};

/// Source of route and stop records.
///
/// This abstraction allows the network to be built from mock data in tests.
pub trait DataProvider {
    /// List every route in the network.
    fn get_all_routes(
        &self,
    ) -> impl Future<Output = Result<Vec<RouteRecord>, ProviderError>> + Send;

    /// List the stops on the route with the given id, in route order.
    fn get_stops_for_route(
        &self,
        route_id: &str,
    ) -> impl Future<Output = Result<Vec<StopRecord>, ProviderError>> + Send;
}
