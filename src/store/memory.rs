use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::error::StoreError;

use super::{ItemRecord, ItemStore, NewItem};

/// Map-backed store. Store-defined order is ascending id, which for records
/// inserted through `insert` is creation order.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: Mutex<BTreeMap<i64, ItemRecord>>,
    next_id: AtomicI64,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, ItemRecord>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn find_all(&self) -> Result<Vec<ItemRecord>, StoreError> {
        Ok(self.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRecord>, StoreError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.lock().contains_key(&id))
    }

    async fn insert(&self, new: NewItem) -> Result<ItemRecord, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = ItemRecord {
            id,
            name: new.name,
            image_url: new.image_url,
            completed: new.completed,
            date_added: new.date_added,
        };
        self.lock().insert(id, record.clone());
        Ok(record)
    }

    async fn save(&self, record: ItemRecord) -> Result<ItemRecord, StoreError> {
        // keep the id counter ahead of ids introduced through upsert, so a
        // later insert cannot collide with them
        self.next_id.fetch_max(record.id, Ordering::SeqCst);
        self.lock().insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.lock().remove(&id).is_some())
    }
}
