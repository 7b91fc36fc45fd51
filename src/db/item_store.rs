use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::error::StoreError;
use crate::store::{ItemRecord, ItemStore, NewItem};

use super::entities::item;
use super::entities::prelude::Item;

/// Relational adapter over the items table. One query per call; isolation
/// beyond that is left to the database.
pub struct SeaOrmItemStore {
    db: DatabaseConnection,
}

impl SeaOrmItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn to_record(model: item::Model) -> ItemRecord {
    ItemRecord {
        id: model.id,
        name: model.name,
        image_url: model.image_url,
        completed: model.completed,
        date_added: model.date_added,
    }
}

#[async_trait]
impl ItemStore for SeaOrmItemStore {
    async fn find_all(&self) -> Result<Vec<ItemRecord>, StoreError> {
        let models = Item::find().all(&self.db).await?;
        Ok(models.into_iter().map(to_record).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRecord>, StoreError> {
        Ok(Item::find_by_id(id).one(&self.db).await?.map(to_record))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let count = Item::find()
            .filter(item::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, new: NewItem) -> Result<ItemRecord, StoreError> {
        let model = item::ActiveModel {
            name: Set(new.name),
            image_url: Set(new.image_url),
            completed: Set(new.completed),
            date_added: Set(new.date_added),
            ..Default::default()
        };
        Ok(to_record(model.insert(&self.db).await?))
    }

    async fn save(&self, record: ItemRecord) -> Result<ItemRecord, StoreError> {
        match Item::find_by_id(record.id).one(&self.db).await? {
            Some(existing) => {
                // date_added is immutable after creation; only the mutable
                // fields are overwritten
                let mut active: item::ActiveModel = existing.into();
                active.name = Set(record.name);
                active.image_url = Set(record.image_url);
                active.completed = Set(record.completed);
                Ok(to_record(active.update(&self.db).await?))
            }
            None => {
                let model = item::ActiveModel {
                    id: Set(record.id),
                    name: Set(record.name),
                    image_url: Set(record.image_url),
                    completed: Set(record.completed),
                    date_added: Set(record.date_added),
                };
                Ok(to_record(model.insert(&self.db).await?))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = Item::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::db::entities::item;
    use crate::store::ItemStore;

    use super::SeaOrmItemStore;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn item_model(id: i64, name: &str) -> item::Model {
        item::Model {
            id,
            name: name.to_string(),
            image_url: format!("https://img.example/{name}.png"),
            completed: false,
            date_added: ts(),
        }
    }

    #[tokio::test]
    async fn find_by_id_maps_row_to_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[item_model(7, "bread")]])
            .into_connection();
        let store = SeaOrmItemStore::new(db);

        let record = store.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "bread");
        assert_eq!(record.date_added, ts());
    }

    #[tokio::test]
    async fn find_by_id_reports_absence_as_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<item::Model>::new()])
            .into_connection();
        let store = SeaOrmItemStore::new(db);

        assert!(store.find_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[item_model(1, "bread"), item_model(2, "milk")]])
            .into_connection();
        let store = SeaOrmItemStore::new(db);

        let records = store.find_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "bread");
        assert_eq!(records[1].name, "milk");
    }

    #[tokio::test]
    async fn delete_by_id_reflects_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let store = SeaOrmItemStore::new(db);

        assert!(store.delete_by_id(1).await.unwrap());
        assert!(!store.delete_by_id(1).await.unwrap());
    }
}
