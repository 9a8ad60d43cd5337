//! Building the network from a data provider.

use tracing::{debug, info};

use crate::error::TransitError;
use crate::provider::DataProvider;

use super::graph::Network;

/// A [`Network`] together with the provider it is loaded from.
///
/// Loading happens at most once per map: both load operations are guarded
/// by explicit flags, so calling them again after they succeeded makes no
/// provider calls and leaves the network untouched.
///
/// If a load fails partway through, the network is left partially built and
/// the guard stays unset. Such a network should be discarded rather than
/// queried or loaded again, since a second attempt would re-associate the
/// routes that were already processed.
pub struct TransitMap<P> {
    provider: P,
    network: Network,
    routes_loaded: bool,
    stops_loaded: bool,
}

impl<P: DataProvider> TransitMap<P> {
    /// Create an empty map backed by `provider`.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            network: Network::new(),
            routes_loaded: false,
            stops_loaded: false,
        }
    }

    /// The network loaded so far.
    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether routes and stops have both been loaded.
    pub fn is_loaded(&self) -> bool {
        self.routes_loaded && self.stops_loaded
    }

    /// Consume the map, keeping only the network.
    pub fn into_network(self) -> Network {
        self.network
    }

    /// Fetch every route and register it by name.
    pub async fn load_routes(&mut self) -> Result<(), TransitError> {
        if self.routes_loaded {
            return Ok(());
        }

        let records = self.provider.get_all_routes().await?;
        for record in records {
            self.network.insert_route(record);
        }
        self.routes_loaded = true;

        info!(routes = self.network.route_count(), "Loaded routes");
        Ok(())
    }

    /// Fetch the stops of every route and link stops and routes together.
    ///
    /// Loads routes first if that has not happened yet. Makes one provider
    /// call per route, in route order.
    pub async fn load_stops(&mut self) -> Result<(), TransitError> {
        if self.stops_loaded {
            return Ok(());
        }
        self.load_routes().await?;

        let targets: Vec<(String, String)> = self
            .network
            .routes()
            .values()
            .map(|r| (r.name().to_string(), r.id().to_string()))
            .collect();

        for (route_name, route_id) in targets {
            let records = self.provider.get_stops_for_route(&route_id).await?;
            debug!(route = %route_name, stops = records.len(), "Loaded route stops");

            for record in records {
                self.network.attach_stop(&route_name, record);
            }
        }
        self.stops_loaded = true;

        info!(
            routes = self.network.route_count(),
            stops = self.network.stop_count(),
            "Loaded network"
        );
        Ok(())
    }

    /// Load routes and stops, returning the finished network.
    pub async fn load(&mut self) -> Result<&Network, TransitError> {
        self.load_stops().await?;
        Ok(&self.network)
    }
}
