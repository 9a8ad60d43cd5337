//! Stop type.

/// A named station, potentially serviced by several routes.
///
/// The name is the network-wide key: no two stops share one. The route
/// associations are route names, kept in the order the routes were
/// discovered while the network was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    id: String,
    name: String,
    route_associations: Vec<String>,
}

impl Stop {
    /// Create a stop with no route associations yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            route_associations: Vec::new(),
        }
    }

    /// Opaque identifier from the data source. May be empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the routes servicing this stop, in discovery order.
    pub fn route_associations(&self) -> &[String] {
        &self.route_associations
    }

    /// A connecting stop is one serviced by two or more routes.
    pub fn is_connecting(&self) -> bool {
        self.route_associations.len() >= 2
    }

    /// Whether the named route services this stop.
    pub fn is_serviced_by(&self, route_name: &str) -> bool {
        self.route_associations.iter().any(|r| r == route_name)
    }

    /// Record that `route_name` services this stop.
    ///
    /// Only called while the network is being built.
    pub(crate) fn associate(&mut self, route_name: &str) {
        self.route_associations.push(route_name.to_string());
    }
}
