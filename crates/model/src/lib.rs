use serde_json::Value;

pub mod env;
pub mod event;
pub mod response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A stored record: arbitrary JSON fields plus a unique string `id`.
///
/// Items carry no schema. The `id` field is generated on create and is the
/// only key the table knows about.
pub type Item = serde_json::Map<String, Value>;
