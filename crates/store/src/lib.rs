use async_trait::async_trait;
use model::{Error, Item};
use std::fmt::{Display, Formatter};

/// Durable home for items, keyed by their `id` field.
///
/// Absence is ordinary, not an error: `get_item` returns `None` for an
/// unknown id and `delete_item` succeeds whether or not the id exists.
/// Each operation is atomic for a single key; there are no batch or range
/// operations and no cross-item transactions.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Write the full item, overwriting any existing item with the same id.
    async fn put_item(&self, item: Item) -> Result<(), StoreError>;

    async fn get_item(&self, item_id: &str) -> Result<Option<Item>, StoreError>;

    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError>;
}

/// Errors arising from the backing table.
#[derive(Debug)]
pub struct StoreError {
    pub item_key: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // The item could not be converted to or from the table representation
    BadItem(String),
    // An error from the underlying table client
    BackendFailure(Error),
}

#[derive(Debug, Clone)]
pub enum StoreOperation {
    PutItem,
    GetItem,
    DeleteItem,
}

impl StoreError {
    pub fn new(item_key: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            item_key,
            operation,
            reason,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl std::error::Error for StoreError {}
