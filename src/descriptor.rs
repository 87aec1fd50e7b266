//! OpenAPI descriptor for the demo actions
//!
//! The assistant platform reads this document to learn which actions exist.
//! It is rebuilt from the operation table on every request; the only input is
//! the deployment domain, which becomes `servers[0].url` verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::DeploymentConfig;
use crate::{Result, routes};

/// OpenAPI version emitted
pub const OPENAPI_VERSION: &str = "3.1.0";

/// HTTP method an operation is invoked with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Primitive type of a request field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// One optional field of a request body
#[derive(Debug, Clone, Copy)]
pub struct SchemaField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Shape of a request body; every field is optional
#[derive(Debug, Clone, Copy)]
pub struct RequestSchema {
    pub fields: &'static [SchemaField],
}

impl RequestSchema {
    /// Render as a JSON Schema object with no required fields
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let properties: serde_json::Map<String, Value> = self
            .fields
            .iter()
            .map(|f| {
                (
                    f.name.to_string(),
                    json!({ "type": f.kind.as_str(), "description": f.description }),
                )
            })
            .collect();

        json!({ "type": "object", "properties": properties })
    }
}

/// An action advertised to the platform
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    /// Identifier the platform invokes the action by (unique)
    pub operation_id: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub request_schema: Option<RequestSchema>,
    pub summary: &'static str,
}

const QUERY_FIELD: SchemaField = SchemaField {
    name: "query",
    kind: FieldKind::String,
    description: "Free-text search query",
};

const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        operation_id: "searchCalendar",
        path: routes::CALENDAR_SEARCH,
        method: HttpMethod::Post,
        request_schema: Some(RequestSchema {
            fields: &[
                QUERY_FIELD,
                SchemaField {
                    name: "time_min",
                    kind: FieldKind::String,
                    description: "RFC 3339 lower bound for event start",
                },
                SchemaField {
                    name: "time_max",
                    kind: FieldKind::String,
                    description: "RFC 3339 upper bound for event end",
                },
            ],
        }),
        summary: "Search calendar events (demo data)",
    },
    OperationDescriptor {
        operation_id: "searchGmail",
        path: routes::GMAIL_SEARCH,
        method: HttpMethod::Post,
        request_schema: Some(RequestSchema {
            fields: &[
                QUERY_FIELD,
                SchemaField {
                    name: "max_results",
                    kind: FieldKind::Integer,
                    description: "Maximum number of emails to return",
                },
            ],
        }),
        summary: "Search emails (demo data)",
    },
    OperationDescriptor {
        operation_id: "searchWeb",
        path: routes::WEB_SEARCH,
        method: HttpMethod::Post,
        request_schema: Some(RequestSchema {
            fields: &[QUERY_FIELD],
        }),
        summary: "Search the web (demo data)",
    },
];

/// The fixed operation table
#[must_use]
pub const fn operations() -> &'static [OperationDescriptor] {
    OPERATIONS
}

/// OpenAPI document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: BTreeMap<String, PathItem>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Base URL operations are resolved against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
}

/// Operations available on one path
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

impl PathItem {
    /// Operations defined on this path
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.get.iter().chain(self.post.iter())
    }
}

/// A single operation in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<String, ResponseSpec>,
}

/// Request body declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<String, MediaType>,
}

/// Schema for one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: Value,
}

/// Response declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpec {
    pub description: String,
    pub content: BTreeMap<String, MediaType>,
}

fn json_content(schema: Value) -> BTreeMap<String, MediaType> {
    BTreeMap::from([("application/json".to_string(), MediaType { schema })])
}

fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "ok": { "type": "boolean" },
            "source": { "type": "string" },
            "query": { "type": "string" }
        },
        "additionalProperties": true
    })
}

fn to_operation(op: &OperationDescriptor) -> Operation {
    Operation {
        operation_id: op.operation_id.to_string(),
        summary: op.summary.to_string(),
        request_body: op.request_schema.map(|schema| RequestBody {
            required: false,
            content: json_content(schema.to_json_schema()),
        }),
        responses: BTreeMap::from([(
            "200".to_string(),
            ResponseSpec {
                description: "Demo results".to_string(),
                content: json_content(response_schema()),
            },
        )]),
    }
}

/// Build the descriptor for a deployment
#[must_use]
pub fn build_descriptor(config: &DeploymentConfig) -> Descriptor {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();
    for op in operations() {
        let item = paths.entry(op.path.to_string()).or_default();
        match op.method {
            HttpMethod::Get => item.get = Some(to_operation(op)),
            HttpMethod::Post => item.post = Some(to_operation(op)),
        }
    }

    Descriptor {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: "Demo Actions".to_string(),
            description: "Calendar, email and web search actions backed by canned demo data"
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        servers: vec![Server {
            url: config.domain().to_string(),
        }],
        paths,
    }
}

impl Descriptor {
    /// Base URL of the first server entry
    #[must_use]
    pub fn server_url(&self) -> Option<&str> {
        self.servers.first().map(|s| s.url.as_str())
    }

    /// Every operation id in path order
    pub fn operation_ids(&self) -> impl Iterator<Item = &str> {
        self.paths
            .values()
            .flat_map(PathItem::operations)
            .map(|op| op.operation_id.as_str())
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as YAML
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn descriptor() -> Descriptor {
        build_descriptor(&DeploymentConfig::new("https://demo.example.com/", 8080).unwrap())
    }

    #[test]
    fn server_url_is_domain_without_trailing_slash() {
        assert_eq!(descriptor().server_url(), Some("https://demo.example.com"));
    }

    #[test]
    fn advertises_three_unique_operations() {
        let doc = descriptor();
        let ids: Vec<&str> = doc.operation_ids().collect();
        assert_eq!(ids.len(), 3);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(unique.contains("searchCalendar"));
        assert!(unique.contains("searchGmail"));
        assert!(unique.contains("searchWeb"));
    }

    #[test]
    fn every_path_is_served() {
        for path in descriptor().paths.keys() {
            assert!(routes::is_served(path), "{path} not routed");
        }
    }

    #[test]
    fn request_bodies_are_optional() {
        let doc = descriptor();
        for item in doc.paths.values() {
            for op in item.operations() {
                let body = op.request_body.as_ref().unwrap();
                assert!(!body.required);
                let schema = &body.content["application/json"].schema;
                assert!(schema.get("required").is_none());
            }
        }
    }

    #[test]
    fn gmail_schema_has_integer_max_results() {
        let doc = descriptor();
        let op = doc.paths[routes::GMAIL_SEARCH].post.as_ref().unwrap();
        let schema = &op.request_body.as_ref().unwrap().content["application/json"].schema;
        assert_eq!(schema["properties"]["max_results"]["type"], "integer");
        assert_eq!(schema["properties"]["query"]["type"], "string");
    }

    #[test]
    fn json_uses_camel_case_operation_id() {
        let json: Value = serde_json::from_str(&descriptor().to_json().unwrap()).unwrap();
        assert_eq!(
            json["paths"]["/web/search"]["post"]["operationId"],
            "searchWeb"
        );
        assert!(json["paths"]["/web/search"].get("get").is_none());
        assert_eq!(json["openapi"], OPENAPI_VERSION);
    }

    #[test]
    fn yaml_matches_json_document() {
        let doc = descriptor();
        let parsed: Descriptor = serde_yaml::from_str(&doc.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
