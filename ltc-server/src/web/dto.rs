//! Response bodies that are not domain types.

use serde::Serialize;

/// Where the API source lives; reported by the index.
pub const SOURCE_URL: &str = "https://github.com/versae/ltc";

/// Error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,

    /// HTTP status, repeated in the body
    pub status: u16,
}

/// API index served at `/`.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub source: &'static str,
    pub status: u16,
    pub resources: Vec<ResourceInfo>,
}

/// One resource in the index.
#[derive(Debug, Serialize)]
pub struct ResourceInfo {
    /// Resource name
    pub resource: &'static str,

    /// Paths serving this resource
    pub endpoints: Vec<&'static str>,

    /// Accepted query parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamInfo>,
}

/// A query parameter description.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub help: &'static str,
    pub required: bool,
}

/// Parameters accepted by the route endpoints.
pub const STOP_QUERY_PARAMS: [ParamInfo; 4] = [
    ParamInfo {
        name: "direction",
        kind: "str",
        help: "Direction of the route (north, east, south, west)",
        required: false,
    },
    ParamInfo {
        name: "stop",
        kind: "int",
        help: "Stop number",
        required: false,
    },
    ParamInfo {
        name: "latitude",
        kind: "float",
        help: "Latitude to sort results by",
        required: false,
    },
    ParamInfo {
        name: "longitude",
        kind: "float",
        help: "Longitude to sort results by",
        required: false,
    },
];

impl IndexResponse {
    /// The index listing every resource.
    pub fn new() -> Self {
        Self {
            message: "Welcome to the London Transit Commission API",
            source: SOURCE_URL,
            status: 200,
            resources: vec![
                ResourceInfo {
                    resource: "index",
                    endpoints: vec!["/"],
                    params: Vec::new(),
                },
                ResourceInfo {
                    resource: "routes_list",
                    endpoints: vec!["/routes", "/routes/"],
                    params: STOP_QUERY_PARAMS.to_vec(),
                },
                ResourceInfo {
                    resource: "routes",
                    endpoints: vec!["/routes/<route>", "/routes/<route>/"],
                    params: STOP_QUERY_PARAMS.to_vec(),
                },
            ],
        }
    }
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self::new()
    }
}
