//! Route size rankings.

use super::graph::Network;

/// A route name and how many stops it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStat<'a> {
    pub name: &'a str,
    pub stop_count: usize,
}

impl Network {
    /// Every route with its stop count, fewest stops first.
    ///
    /// The sort is stable, so routes with equal counts keep network order.
    pub fn route_stats(&self) -> Vec<RouteStat<'_>> {
        let mut stats: Vec<_> = self
            .routes()
            .values()
            .map(|route| RouteStat {
                name: route.name(),
                stop_count: route.stop_count(),
            })
            .collect();
        stats.sort_by_key(|stat| stat.stop_count);
        stats
    }

    /// The routes tied for the most stops, scanning down from the largest.
    ///
    /// The scan stops before the first entry of the ascending ranking, so
    /// that entry is never reported: a single-route network yields nothing,
    /// and when every route ties for the maximum the smallest-ranked one is
    /// left out.
    pub fn get_routes_with_most_stops(&self) -> Vec<RouteStat<'_>> {
        let stats = self.route_stats();
        let mut most = Vec::new();
        let mut max_count = None;

        for stat in stats.iter().skip(1).rev() {
            match max_count {
                None => {
                    max_count = Some(stat.stop_count);
                    most.push(*stat);
                }
                Some(max) if stat.stop_count >= max => most.push(*stat),
                Some(_) => break,
            }
        }

        most
    }

    /// The routes tied for the fewest stops, in network order.
    pub fn get_routes_with_least_stops(&self) -> Vec<RouteStat<'_>> {
        let stats = self.route_stats();
        let mut least = Vec::new();
        let mut min_count = None;

        for stat in stats {
            match min_count {
                Some(min) if stat.stop_count > min => break,
                Some(_) => least.push(stat),
                None => {
                    min_count = Some(stat.stop_count);
                    least.push(stat);
                }
            }
        }

        least
    }
}
