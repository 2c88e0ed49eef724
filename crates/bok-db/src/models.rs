use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use bok_types::models::Bok;

use crate::StoreError;

/// Database row for the `bok` table, as SQLite hands it back.
/// Distinct from the bok-types model to keep the DB layer independent.
#[derive(Debug)]
pub struct BokRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub created_at: String,
}

impl TryFrom<BokRow> for Bok {
    type Error = StoreError;

    fn try_from(row: BokRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<Uuid>()
            .map_err(|e| StoreError::Corrupt(format!("bok id '{}': {}", row.id, e)))?;
        let created_at = parse_timestamp(&row.created_at).ok_or_else(|| {
            StoreError::Corrupt(format!("created_at '{}' on bok '{}'", row.created_at, row.id))
        })?;

        Ok(Bok {
            id,
            title: row.title,
            description: row.description,
            source_url: row.source_url,
            created_at,
        })
    }
}

/// SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone;
/// those are UTC. RFC 3339 is accepted too for rows written by other tools.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|ndt| ndt.and_utc())
    })
}
