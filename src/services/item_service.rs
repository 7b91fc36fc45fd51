use std::sync::Arc;

use tracing::{debug, info};

use crate::api::{Item, ItemManipulationRequest};
use crate::clock::Clock;
use crate::error::ServiceError;
use crate::store::{ItemRecord, ItemStore, NewItem};

/// CRUD surface over the item store. Each call is a single store round trip
/// plus the record-to-view projection; no state is kept between calls.
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    clock: Arc<dyn Clock>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn find_all(&self) -> Result<Vec<Item>, ServiceError> {
        let records = self.store.find_all().await?;
        Ok(records.into_iter().map(transform_record).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Item, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .map(transform_record)
            .ok_or(ServiceError::NotFound(id))
    }

    /// Persists a new item. Identity comes from the store, date_added from
    /// the injected clock at the moment of the call.
    pub async fn create(&self, request: ItemManipulationRequest) -> Result<Item, ServiceError> {
        let record = self
            .store
            .insert(NewItem {
                name: request.name,
                image_url: request.image_url,
                completed: request.completed,
                date_added: self.clock.now(),
            })
            .await?;
        info!(id = record.id, "created item");
        Ok(transform_record(record))
    }

    /// Overwrites name, image reference and completion flag on an existing
    /// item. Identity and date_added are preserved.
    pub async fn update(
        &self,
        id: i64,
        request: ItemManipulationRequest,
    ) -> Result<Item, ServiceError> {
        let Some(mut record) = self.store.find_by_id(id).await? else {
            return Err(ServiceError::NotFound(id));
        };
        record.name = request.name;
        record.image_url = request.image_url;
        record.completed = request.completed;
        let record = self.store.save(record).await?;
        debug!(id, "updated item");
        Ok(transform_record(record))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        self.store.delete_by_id(id).await?;
        info!(id, "deleted item");
        Ok(())
    }

    /// Fetches every item and orders the result by the given criteria:
    /// `"name"` sorts lexicographically ascending, `"date"` chronologically
    /// ascending by date_added. Any other value returns the items in store
    /// order, unsorted; unrecognized criteria are not an error.
    pub async fn sort(&self, criteria: &str) -> Result<Vec<Item>, ServiceError> {
        let mut records = self.store.find_all().await?;
        match criteria {
            "name" => records.sort_by(|a, b| a.name.cmp(&b.name)),
            "date" => records.sort_by(|a, b| a.date_added.cmp(&b.date_added)),
            _ => {}
        }
        Ok(records.into_iter().map(transform_record).collect())
    }
}

// Five-field projection from the stored record to the API view. Nothing is
// derived or defaulted here.
fn transform_record(record: ItemRecord) -> Item {
    Item {
        id: record.id,
        name: record.name,
        image_url: record.image_url,
        completed: record.completed,
        date_added: record.date_added,
    }
}
