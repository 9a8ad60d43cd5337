//! Records handed from a data provider to the network builder.

use serde::{Deserialize, Serialize};

/// A route as reported by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: String,
    pub name: String,
    /// Grouping label shared by branches of the same line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,
}

impl RouteRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line_name: None,
        }
    }

    /// Set the line this route is a branch of.
    pub fn with_line_name(mut self, line_name: impl Into<String>) -> Self {
        self.line_name = Some(line_name.into());
        self
    }
}

/// A stop as reported by the data source for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl StopRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
