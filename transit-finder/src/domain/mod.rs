//! Domain types for the transit network.
//!
//! A network is made of routes and the stops they service. Both are keyed
//! by their display name, and each refers to the other by that name instead
//! of holding it directly, so the graph is owned in one place
//! (see [`crate::network::Network`]).

mod route;
mod stop;

pub use route::Route;
pub use stop::Stop;
