//! Subway network explorer.
//!
//! Builds an in-memory graph of transit routes and stops from a data source,
//! reports statistics over it, and finds a sequence of routes (with
//! transfers) that connects two stops.

pub mod cli;
pub mod domain;
pub mod error;
pub mod network;
pub mod provider;

pub use error::TransitError;
