use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted Body of Knowledge record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bok {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller for a new record. Identifier and creation
/// time are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBok {
    pub title: String,
    pub description: Option<String>,
    pub source_url: Option<String>,
}
