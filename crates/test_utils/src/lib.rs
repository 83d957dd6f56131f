use aws_sdk_dynamodb::operation::delete_item::DeleteItemOutput;
use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};
use model::env::ITEMS_TABLE_NAME;
use model::event::{ApiGatewayEvent, HttpContext, RequestContext};
use std::collections::HashMap;
use std::env;

/// Build an event as API Gateway REST APIs (payload v1) deliver it:
/// top-level method, display path and resource pattern.
pub fn rest_api_event(
    method: &str,
    path: &str,
    resource: &str,
    body: Option<&str>,
) -> ApiGatewayEvent {
    ApiGatewayEvent {
        http_method: Some(method.to_string()),
        path: Some(path.to_string()),
        resource: Some(resource.to_string()),
        body: body.map(str::to_string),
        ..Default::default()
    }
}

/// A REST-shape event addressing one item through `pathParameters`.
pub fn rest_api_event_with_id(
    method: &str,
    path: &str,
    item_id: &str,
    body: Option<&str>,
) -> ApiGatewayEvent {
    let mut event: ApiGatewayEvent = rest_api_event(method, path, "/items/{id}", body);
    event.path_parameters = Some(HashMap::from([("id".to_string(), item_id.to_string())]));

    event
}

/// Build an event as API Gateway HTTP APIs (payload v2) deliver it: no
/// top-level method, raw path and route key instead.
pub fn http_api_event(
    method: &str,
    raw_path: &str,
    route_key: &str,
    body: Option<&str>,
) -> ApiGatewayEvent {
    ApiGatewayEvent {
        raw_path: Some(raw_path.to_string()),
        route_key: Some(route_key.to_string()),
        request_context: Some(RequestContext {
            route_key: Some(route_key.to_string()),
            http: Some(HttpContext {
                method: Some(method.to_string()),
            }),
        }),
        body: body.map(str::to_string),
        ..Default::default()
    }
}

/// A default mock DynamoDB client: puts and deletes succeed, gets find
/// nothing.
pub fn create_mock_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let put_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build();
    let get_rule: Rule = mock!(aws_sdk_dynamodb::Client::get_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| GetItemOutput::builder().build())
        .repeatedly()
        .build();
    let delete_rule: Rule = mock!(aws_sdk_dynamodb::Client::delete_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| DeleteItemOutput::builder().build())
        .repeatedly()
        .build();

    mock_client!(
        aws_sdk_dynamodb,
        RuleMode::MatchAny,
        [&put_rule, &get_rule, &delete_rule]
    )
}

/// Test table name
pub const TEST_TABLE: &str = "ItemsTableTest";

/// Setup default environment variables used in testing
pub fn setup_default_env() {
    env::set_var(ITEMS_TABLE_NAME, TEST_TABLE);
}
