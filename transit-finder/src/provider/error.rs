//! Data provider error types.

/// Errors that can occur when fetching records from a data provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The provider has no stops for this route id
    #[error("no stops for route id {0}")]
    UnknownRoute(String),

    /// Fixture data could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
