//! The transit network graph and the queries answered over it.
//!
//! [`TransitMap`] pulls records from a [`DataProvider`](crate::provider::DataProvider)
//! into a [`Network`], which owns every route and stop. Once loaded, the
//! network is read-only: connectivity, statistics and route finding all
//! borrow it immutably.

mod connectivity;
mod finder;
mod graph;
mod loader;
mod stats;

#[cfg(test)]
mod finder_tests;
#[cfg(test)]
pub(crate) mod fixtures;

pub use graph::Network;
pub use loader::TransitMap;
pub use stats::RouteStat;
