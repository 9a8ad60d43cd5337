//! Route type.

use super::Stop;

/// A named transit route and the stops it services, in source order.
///
/// Stops are referenced by name; the canonical [`Stop`] for each name lives
/// in the owning network. The list may repeat a name if the data source
/// reported the stop more than once.
///
/// # Examples
///
/// ```
/// use transit_finder::domain::{Route, Stop};
///
/// let route = Route::new("Red", "Red Line", Some("line-Red".to_string()));
/// assert_eq!(route.line_name(), Some("line-Red"));
/// assert!(!route.has_stop(&Stop::new("place-alfcl", "Alewife")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: String,
    name: String,
    line_name: Option<String>,
    stops: Vec<String>,
}

impl Route {
    /// Create a route with no stops yet.
    ///
    /// Routes that share a `line_name` are branches of one logical line.
    pub fn new(id: impl Into<String>, name: impl Into<String>, line_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line_name,
            stops: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_name(&self) -> Option<&str> {
        self.line_name.as_deref()
    }

    /// Names of the stops on this route, in source order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Whether this route services `stop`.
    pub fn has_stop(&self, stop: &Stop) -> bool {
        self.stops.iter().any(|s| s == stop.name())
    }

    /// Whether this route services both stops, so a rider can stay on it.
    pub fn has_stops(&self, first: &Stop, second: &Stop) -> bool {
        self.has_stop(first) && self.has_stop(second)
    }

    pub(crate) fn push_stop(&mut self, stop_name: &str) {
        self.stops.push(stop_name.to_string());
    }
}
