use aws_config::BehaviorVersion;
use handler::function_handler;
use lambda_runtime::{run, service_fn, tracing, LambdaEvent};
use model::event::ApiGatewayEvent;
use model::Error;
use store_dynamodb::DynamoDbItemStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&config);

    // One store per process, shared across invocations.
    let store: DynamoDbItemStore = DynamoDbItemStore::from_env(dynamodb_client);

    run(service_fn(|event: LambdaEvent<ApiGatewayEvent>| {
        function_handler(&store, event)
    }))
    .await
}
