use crate::resolver::{RequestDescriptor, Route};
use lambda_runtime::{tracing, LambdaEvent};
use model::event::ApiGatewayEvent;
use model::response::ApiResponse;
use model::{Error, Item};
use serde_json::{json, Value};
use store::ItemStore;
use uuid::Uuid;

pub mod resolver;

/// Handle one API Gateway event against the backing store, designed for use
/// with `lambda_runtime::run()`.
///
/// Recognised-but-unmatched requests get an explicit 400 envelope; malformed
/// bodies and store failures propagate as `Err` and are surfaced by the
/// runtime's own failure response.
pub async fn function_handler(
    store: &dyn ItemStore,
    event: LambdaEvent<ApiGatewayEvent>,
) -> Result<ApiResponse, Error> {
    let (event, context) = event.into_parts();
    let descriptor: RequestDescriptor = RequestDescriptor::from_event(&event);

    tracing::info!(
        request_id = %context.request_id,
        method = descriptor.method.as_deref().unwrap_or_default(),
        item_id = descriptor.item_id.as_deref().unwrap_or_default(),
        "resolved request"
    );

    match descriptor.route() {
        Route::Create => create_item(store, &event).await,
        Route::Read { item_id } => read_item(store, &item_id).await,
        Route::Update { item_id } => update_item(store, &event, &item_id).await,
        Route::Delete { item_id } => delete_item(store, &item_id).await,
        Route::Invalid => ApiResponse::json(400, json!({"error": "Invalid request"})),
    }
}

async fn create_item(store: &dyn ItemStore, event: &ApiGatewayEvent) -> Result<ApiResponse, Error> {
    let mut item: Item = parse_body(event)?;

    // The generated id always wins over anything the client supplied.
    let item_id: String = Uuid::new_v4().to_string();
    item.insert("id".to_string(), Value::String(item_id.clone()));

    store.put_item(item).await?;

    ApiResponse::json(200, json!({"message": "Item created", "id": item_id}))
}

async fn read_item(store: &dyn ItemStore, item_id: &str) -> Result<ApiResponse, Error> {
    // An absent id responds 200 with an empty object, not 404.
    let item: Item = store.get_item(item_id).await?.unwrap_or_default();

    ApiResponse::json(200, Value::Object(item))
}

async fn update_item(
    store: &dyn ItemStore,
    event: &ApiGatewayEvent,
    item_id: &str,
) -> Result<ApiResponse, Error> {
    let mut item: Item = parse_body(event)?;

    // Full replace keyed by the path id; a conflicting body id is discarded.
    item.insert("id".to_string(), Value::String(item_id.to_string()));

    store.put_item(item).await?;

    ApiResponse::json(200, json!({"message": "Item updated"}))
}

async fn delete_item(store: &dyn ItemStore, item_id: &str) -> Result<ApiResponse, Error> {
    store.delete_item(item_id).await?;

    ApiResponse::json(200, json!({"message": "Item deleted"}))
}

fn parse_body(event: &ApiGatewayEvent) -> Result<Item, Error> {
    let body: &str = event.body.as_deref().ok_or("request body is required")?;

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use crate::function_handler;
    use lambda_runtime::{Context, LambdaEvent};
    use model::event::ApiGatewayEvent;
    use model::response::ApiResponse;
    use model::Item;
    use serde_json::{json, Value};
    use store::ItemStore;
    use store_in_memory::InMemoryItemStore;
    use test_utils::{http_api_event, rest_api_event, rest_api_event_with_id};

    fn lambda_event(event: ApiGatewayEvent) -> LambdaEvent<ApiGatewayEvent> {
        LambdaEvent::new(event, Context::default())
    }

    fn body_json(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).expect("response body should be JSON")
    }

    #[tokio::test]
    async fn create_generates_a_fresh_id() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event(
            "POST",
            "/items",
            "/items",
            Some(r#"{"name":"widget","id":"client-id"}"#),
        );

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("create should succeed");

        assert_eq!(200, response.status_code);
        let body: Value = body_json(&response);
        assert_eq!(json!("Item created"), body["message"]);

        let item_id: &str = body["id"].as_str().expect("response should carry an id");
        assert_ne!("client-id", item_id);

        let stored: Item = store
            .get_item(item_id)
            .await
            .unwrap()
            .expect("item should be stored under the generated id");
        assert_eq!(json!(item_id), stored["id"]);
        assert_eq!(json!("widget"), stored["name"]);
    }

    #[tokio::test]
    async fn create_requires_a_collection_shape() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event("POST", "/widgets", "/widgets", Some(r#"{"name":"widget"}"#));

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("rejection still produces a response");

        assert_eq!(400, response.status_code);
        assert_eq!(json!("Invalid request"), body_json(&response)["error"]);
    }

    #[tokio::test]
    async fn create_routes_on_route_key_alone() {
        let store = InMemoryItemStore::default();
        let event = http_api_event("POST", "/", "POST /items", Some(r#"{"name":"widget"}"#));

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("create should succeed");

        assert_eq!(200, response.status_code);
        assert_eq!(json!("Item created"), body_json(&response)["message"]);
    }

    #[tokio::test]
    async fn create_with_malformed_body_fails() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event("POST", "/items", "/items", Some("not json"));

        let result = function_handler(&store, lambda_event(event)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn read_of_absent_id_returns_empty_object() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event_with_id("GET", "/items/missing", "missing", None);

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("read should succeed");

        assert_eq!(200, response.status_code);
        assert_eq!(json!({}), body_json(&response));
    }

    #[tokio::test]
    async fn read_uses_fallback_path_extraction() {
        let store = InMemoryItemStore::default();
        store
            .put_item(
                json!({"id": "abc123", "name": "widget"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();

        // No structured path parameters, only the raw path.
        let event = rest_api_event("GET", "/items/abc123", "", None);

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("read should succeed");

        assert_eq!(200, response.status_code);
        assert_eq!(json!("widget"), body_json(&response)["name"]);
    }

    #[tokio::test]
    async fn update_path_id_wins_over_body_id() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event_with_id(
            "PUT",
            "/items/path-id",
            "path-id",
            Some(r#"{"id":"body-id","name":"renamed"}"#),
        );

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("update should succeed");

        assert_eq!(200, response.status_code);
        assert_eq!(json!("Item updated"), body_json(&response)["message"]);

        let stored: Item = store
            .get_item("path-id")
            .await
            .unwrap()
            .expect("item should be stored under the path id");
        assert_eq!(json!("path-id"), stored["id"]);
        assert!(store.get_item("body-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_the_whole_item() {
        let store = InMemoryItemStore::default();
        store
            .put_item(
                json!({"id": "abc123", "name": "widget", "qty": 4})
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();

        let event =
            rest_api_event_with_id("PUT", "/items/abc123", "abc123", Some(r#"{"name":"gadget"}"#));

        function_handler(&store, lambda_event(event))
            .await
            .expect("update should succeed");

        let stored: Item = store.get_item("abc123").await.unwrap().unwrap();
        assert_eq!(json!("gadget"), stored["name"]);
        // Full replace, the old qty field is gone.
        assert!(stored.get("qty").is_none());
    }

    #[tokio::test]
    async fn delete_of_absent_id_succeeds() {
        let store = InMemoryItemStore::default();
        let event = rest_api_event_with_id("DELETE", "/items/missing", "missing", None);

        let response = function_handler(&store, lambda_event(event))
            .await
            .expect("delete should succeed");

        assert_eq!(200, response.status_code);
        assert_eq!(json!("Item deleted"), body_json(&response)["message"]);
    }

    #[tokio::test]
    async fn delete_removes_the_item() {
        let store = InMemoryItemStore::default();
        store
            .put_item(json!({"id": "abc123"}).as_object().cloned().unwrap())
            .await
            .unwrap();

        let event = rest_api_event_with_id("DELETE", "/items/abc123", "abc123", None);

        function_handler(&store, lambda_event(event))
            .await
            .expect("delete should succeed");

        assert!(store.get_item("abc123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn created_item_round_trips_through_read() {
        let store = InMemoryItemStore::default();

        let create = rest_api_event("POST", "/items", "/items", Some(r#"{"name":"widget"}"#));
        let response = function_handler(&store, lambda_event(create))
            .await
            .expect("create should succeed");
        let item_id: String = body_json(&response)["id"]
            .as_str()
            .expect("create should return an id")
            .to_string();

        let read = http_api_event("GET", &format!("/items/{item_id}"), "GET /items/{id}", None);
        let response = function_handler(&store, lambda_event(read))
            .await
            .expect("read should succeed");

        assert_eq!(
            json!({"id": item_id, "name": "widget"}),
            body_json(&response)
        );
    }
}
