//! MBTA v3 API response types.
//!
//! The API speaks JSON:API: every response is a document whose `data` member
//! holds a list of resources. Only the fields the network needs are modelled.

use serde::Deserialize;

use super::records::{RouteRecord, StopRecord};

/// Top-level JSON:API document.
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: Vec<T>,
}

/// A `route` resource.
#[derive(Debug, Deserialize)]
pub struct RouteResource {
    pub id: String,
    pub attributes: RouteAttributes,
    #[serde(default)]
    pub relationships: Option<RouteRelationships>,
}

#[derive(Debug, Deserialize)]
pub struct RouteAttributes {
    pub long_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteRelationships {
    #[serde(default)]
    pub line: Option<Relationship>,
}

/// A to-one relationship; `data` is null when unset.
#[derive(Debug, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// A `stop` resource.
#[derive(Debug, Deserialize)]
pub struct StopResource {
    pub id: String,
    pub attributes: StopAttributes,
}

#[derive(Debug, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

impl From<RouteResource> for RouteRecord {
    fn from(resource: RouteResource) -> Self {
        let line_name = resource
            .relationships
            .and_then(|r| r.line)
            .and_then(|l| l.data)
            .map(|d| d.id);

        RouteRecord {
            id: resource.id,
            name: resource.attributes.long_name,
            line_name,
        }
    }
}

impl From<StopResource> for StopRecord {
    fn from(resource: StopResource) -> Self {
        StopRecord {
            id: resource.id,
            name: resource.attributes.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_routes_document() {
        let json = r#"{
            "data": [
                {
                    "id": "Green-B",
                    "type": "route",
                    "attributes": { "long_name": "Green Line B", "type": 0 },
                    "relationships": {
                        "line": { "data": { "id": "line-Green", "type": "line" } }
                    }
                },
                {
                    "id": "Mattapan",
                    "type": "route",
                    "attributes": { "long_name": "Mattapan Trolley", "type": 0 },
                    "relationships": { "line": { "data": null } }
                },
                {
                    "id": "Red",
                    "type": "route",
                    "attributes": { "long_name": "Red Line", "type": 1 }
                }
            ]
        }"#;

        let document: Document<RouteResource> = serde_json::from_str(json).unwrap();
        let records: Vec<RouteRecord> = document.data.into_iter().map(Into::into).collect();

        assert_eq!(
            records,
            vec![
                RouteRecord::new("Green-B", "Green Line B").with_line_name("line-Green"),
                RouteRecord::new("Mattapan", "Mattapan Trolley"),
                RouteRecord::new("Red", "Red Line"),
            ]
        );
    }

    #[test]
    fn parse_stops_document() {
        let json = r#"{
            "data": [
                { "id": "place-alfcl", "type": "stop", "attributes": { "name": "Alewife" } },
                { "id": "place-davis", "type": "stop", "attributes": { "name": "Davis" } }
            ]
        }"#;

        let document: Document<StopResource> = serde_json::from_str(json).unwrap();
        let records: Vec<StopRecord> = document.data.into_iter().map(Into::into).collect();

        assert_eq!(
            records,
            vec![
                StopRecord::new("place-alfcl", "Alewife"),
                StopRecord::new("place-davis", "Davis"),
            ]
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        let result: Result<Document<StopResource>, _> = serde_json::from_str(r#"{"errors": []}"#);
        assert!(result.is_err());
    }
}
