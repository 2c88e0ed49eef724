use rusqlite::Connection;
use uuid::Uuid;

use bok_types::models::NewBok;

use crate::models::BokRow;
use crate::{Database, StoreError};

impl Database {
    // -- BoK --

    /// Insert one record and return the stored row. Single statement, so a
    /// failure leaves nothing behind.
    pub fn create_bok(&self, new: &NewBok) -> Result<BokRow, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| insert_bok(conn, &id, new))
    }
}

fn insert_bok(conn: &Connection, id: &str, new: &NewBok) -> Result<BokRow, StoreError> {
    let row = conn.query_row(
        "INSERT INTO bok (id, title, description, source_url) VALUES (?1, ?2, ?3, ?4)
         RETURNING id, title, description, source_url, created_at",
        rusqlite::params![id, &new.title, &new.description, &new.source_url],
        map_row,
    )?;
    Ok(row)
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BokRow> {
    Ok(BokRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        source_url: row.get(3)?,
        created_at: row.get(4)?,
    })
}
