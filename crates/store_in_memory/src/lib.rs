use async_trait::async_trait;
use model::Item;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use store::StoreErrorReason::BadItem;
use store::StoreOperation::PutItem;
use store::{ItemStore, StoreError};

/// In-process `ItemStore` backed by a `HashMap`, for use in testing.
#[derive(Default)]
pub struct InMemoryItemStore {
    items: Arc<Mutex<HashMap<String, Item>>>,
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn put_item(&self, item: Item) -> Result<(), StoreError> {
        let item_id: String = item
            .get("id")
            .and_then(|value| value.as_str())
            .ok_or_else(|| {
                StoreError::new(
                    String::new(),
                    PutItem,
                    BadItem("item is missing a string `id` field".to_string()),
                )
            })?
            .to_string();

        self.items.lock().unwrap().insert(item_id, item);

        Ok(())
    }

    async fn get_item(&self, item_id: &str) -> Result<Option<Item>, StoreError> {
        let guard = self.items.lock().unwrap();

        Ok(guard.get(item_id).cloned())
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), StoreError> {
        self.items.lock().unwrap().remove(item_id);

        Ok(())
    }
}
