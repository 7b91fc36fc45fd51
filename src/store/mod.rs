use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::error::StoreError;

pub mod memory;

pub use memory::InMemoryItemStore;

/// An item as the store holds it. Identity is assigned by the store at
/// insert and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub completed: bool,
    pub date_added: DateTime<FixedOffset>,
}

/// Insert shape: everything but the identity, which the store assigns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub image_url: String,
    pub completed: bool,
    pub date_added: DateTime<FixedOffset>,
}

/// Keyed store of item records addressed by integer identity.
///
/// Absence is part of the contract (`None` / `false`), not an error;
/// `StoreError` is reserved for failures of the store itself.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All records, in store-defined order.
    async fn find_all(&self) -> Result<Vec<ItemRecord>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRecord>, StoreError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Inserts a new record, assigning it a fresh identity.
    async fn insert(&self, new: NewItem) -> Result<ItemRecord, StoreError>;

    /// Upsert by identity: overwrites the stored record if one exists for
    /// `record.id`, inserts the record as-is otherwise.
    async fn save(&self, record: ItemRecord) -> Result<ItemRecord, StoreError>;

    /// Returns `false` when no record existed for `id`.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}
