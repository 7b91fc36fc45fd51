use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Read-facing projection of a stored item. Built fresh on every read; it
/// carries no lifecycle of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub completed: bool,
    pub date_added: DateTime<FixedOffset>,
}

/// Input payload for both create and update. Identity and date_added are
/// never caller-supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemManipulationRequest {
    pub name: String,
    pub image_url: String,
    pub completed: bool,
}
