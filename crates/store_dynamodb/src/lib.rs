use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::{DeleteItemError, DeleteItemOutput};
use aws_sdk_dynamodb::operation::get_item::{GetItemError, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use model::Item;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use std::collections::HashMap;
use store::StoreErrorReason::{BackendFailure, BadItem};
use store::StoreOperation::{DeleteItem, GetItem, PutItem};
use store::{ItemStore, StoreError};

const ITEM_ID: &str = "id";

/// `ItemStore` backed by a DynamoDB table with a string `id` partition key.
pub struct DynamoDbItemStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
    consistent_read: bool,
}

impl DynamoDbItemStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        DynamoDbItemStore {
            table_name: table_name.into(),
            dynamodb_client,
            consistent_read: false,
        }
    }

    /// Construct from the environment, falling back to the default table
    /// name when `ITEMS_TABLE_NAME` is not set.
    pub fn from_env(dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        let table_name: String = std::env::var(model::env::ITEMS_TABLE_NAME)
            .unwrap_or_else(|_| model::env::DEFAULT_ITEMS_TABLE.to_string());

        DynamoDbItemStore::new(dynamodb_client, table_name)
    }

    pub fn consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = consistent_read;
        self
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        let item_key: String = item_key(&item);

        let attributes: HashMap<String, AttributeValue> = to_item(&item)
            .map_err(|err| StoreError::new(item_key.clone(), PutItem, BadItem(err.to_string())))?;

        self.put(attributes)
            .await
            .map_err(|err| StoreError::new(item_key, PutItem, BackendFailure(err.into())))?;

        Ok(())
    }

    async fn get_item(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        let output: GetItemOutput = self.get(item_id).await.map_err(|err| {
            StoreError::new(item_id.to_string(), GetItem, BackendFailure(err.into()))
        })?;

        // A missing item is not an error, the handler decides what absence means.
        let attributes: HashMap<String, AttributeValue> = match output.item {
            Some(attributes) => attributes,
            None => return Ok(None),
        };

        let item: Item = from_item(attributes).map_err(|err| {
            StoreError::new(item_id.to_string(), GetItem, BadItem(err.to_string()))
        })?;

        Ok(Some(item))
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError> {
        self.delete(item_id).await.map_err(|err| {
            StoreError::new(item_id.to_string(), DeleteItem, BackendFailure(err.into()))
        })?;

        Ok(())
    }
}

impl DynamoDbItemStore {
    async fn get(
        &self,
        item_id: &str,
    ) -> Result<GetItemOutput, SdkError<GetItemError, HttpResponse>> {
        self.dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .consistent_read(self.consistent_read)
            .key(ITEM_ID, AttributeValue::S(item_id.to_string()))
            .send()
            .await
    }

    async fn put(
        &self,
        attributes: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
    }

    async fn delete(
        &self,
        item_id: &str,
    ) -> Result<DeleteItemOutput, SdkError<DeleteItemError, HttpResponse>> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(ITEM_ID, AttributeValue::S(item_id.to_string()))
            .send()
            .await
    }
}

fn item_key(item: &Item) -> String {
    item.get(ITEM_ID)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string()
}
