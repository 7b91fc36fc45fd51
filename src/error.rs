use thiserror::Error;

/// Failure of the underlying store itself. Absence of a record is never a
/// store error; it surfaces as `None`/`false` from the store contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("item not found (id={0})")]
    NotFound(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}
