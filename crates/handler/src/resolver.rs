use model::event::ApiGatewayEvent;

const COLLECTION_SUFFIX: &str = "/items";
const ITEM_PATH_MARKER: &str = "/items/";

/// The canonical (method, item id, collection shape) triple derived from one
/// inbound event.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Option<String>,
    pub item_id: Option<String>,
    pub is_collection_request: bool,
}

/// The operation selected for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Create,
    Read { item_id: String },
    Update { item_id: String },
    Delete { item_id: String },
    Invalid,
}

impl RequestDescriptor {
    /// Normalise the REST API and HTTP API event shapes into one descriptor.
    ///
    /// No single field is authoritative, each front-end populates its own
    /// subset, so every extraction is an ordered fallback chain.
    pub fn from_event(event: &ApiGatewayEvent) -> Self {
        let item_id: Option<String> =
            path_parameter_id(event).or_else(|| path_segment_id(display_path(event)));

        RequestDescriptor {
            method: http_method(event),
            item_id,
            is_collection_request: is_collection_request(event),
        }
    }

    /// Select the operation, checked in fixed priority order, first match
    /// wins. A POST without a recognised collection shape is rejected, never
    /// treated as collection access.
    pub fn route(&self) -> Route {
        match (self.method.as_deref(), self.item_id.as_deref()) {
            (Some("POST"), _) if self.is_collection_request => Route::Create,
            (Some("GET"), Some(item_id)) => Route::Read {
                item_id: item_id.to_string(),
            },
            (Some("PUT"), Some(item_id)) => Route::Update {
                item_id: item_id.to_string(),
            },
            (Some("DELETE"), Some(item_id)) => Route::Delete {
                item_id: item_id.to_string(),
            },
            _ => Route::Invalid,
        }
    }
}

/// REST APIs set `httpMethod`; HTTP APIs nest the method under
/// `requestContext.http`.
fn http_method(event: &ApiGatewayEvent) -> Option<String> {
    event
        .http_method
        .clone()
        .or_else(|| event.request_context.as_ref()?.http.as_ref()?.method.clone())
}

fn display_path(event: &ApiGatewayEvent) -> &str {
    event
        .path
        .as_deref()
        .or(event.raw_path.as_deref())
        .unwrap_or_default()
}

fn route_key(event: &ApiGatewayEvent) -> &str {
    event
        .route_key
        .as_deref()
        .or_else(|| event.request_context.as_ref()?.route_key.as_deref())
        .unwrap_or_default()
}

fn resource(event: &ApiGatewayEvent) -> &str {
    event.resource.as_deref().unwrap_or_default()
}

/// An empty-string parameter counts as absent, the same as no parameter.
fn path_parameter_id(event: &ApiGatewayEvent) -> Option<String> {
    event
        .path_parameters
        .as_ref()?
        .get("id")
        .filter(|item_id| !item_id.is_empty())
        .cloned()
}

/// Front-ends that never populate `pathParameters` still address items by
/// path; take the last segment after stripping trailing slashes.
fn path_segment_id(path: &str) -> Option<String> {
    if !path.contains(ITEM_PATH_MARKER) {
        return None;
    }

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn is_collection_request(event: &ApiGatewayEvent) -> bool {
    display_path(event).ends_with(COLLECTION_SUFFIX)
        || resource(event).ends_with(COLLECTION_SUFFIX)
        || route_key(event).ends_with(COLLECTION_SUFFIX)
}
