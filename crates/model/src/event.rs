use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The union of the two event shapes API Gateway can deliver.
///
/// REST APIs (payload v1) populate `httpMethod`, `path`, `resource` and
/// `pathParameters`; HTTP APIs (payload v2) populate `rawPath`, `routeKey`
/// and nest the method under `requestContext.http`. Every field is optional
/// so one struct accepts either shape, or any partial mix of the two.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayEvent {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub raw_path: Option<String>,
    pub route_key: Option<String>,
    pub resource: Option<String>,
    pub path_parameters: Option<HashMap<String, String>>,
    pub request_context: Option<RequestContext>,
    pub body: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub route_key: Option<String>,
    pub http: Option<HttpContext>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpContext {
    pub method: Option<String>,
}
