//! Transit network error types.

use crate::provider::ProviderError;

/// Errors from building or querying the transit network.
///
/// Finding no itinerary between two stops is not an error: the route finder
/// returns an empty list instead.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    /// The data source failed while the network was being loaded.
    ///
    /// The network is left partially built and should not be used.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(#[from] ProviderError),

    /// No stop with this name
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// No route with this name
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
