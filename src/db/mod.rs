pub mod connection;
pub mod entities;
pub mod item_store;

pub use connection::{connect, ensure_schema};
pub use item_store::SeaOrmItemStore;
