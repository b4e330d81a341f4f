use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{OptionalExtension, params};

use super::connection::DbConn;
use super::models::SnapshotRow;

/// Write the payload into the slot, replacing whatever was there
pub fn save_snapshot(
    conn: &mut DbConn,
    key: &str,
    payload: &str,
    saved_at: NaiveDateTime,
) -> Result<SnapshotRow> {
    let sql = "INSERT INTO snapshots (key, payload, saved_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, saved_at = excluded.saved_at RETURNING key, payload, saved_at";

    conn.query_row(sql, params![key, payload, saved_at], parse_snapshot_row)
        .with_context(|| format!("Failed to save snapshot {}", key))
}

pub fn load_snapshot(conn: &mut DbConn, key: &str) -> Result<Option<SnapshotRow>> {
    let sql = "SELECT key, payload, saved_at FROM snapshots WHERE key = ?1";

    conn.query_row(sql, params![key], parse_snapshot_row)
        .optional()
        .with_context(|| format!("Failed to load snapshot {}", key))
}

fn parse_snapshot_row(row: &rusqlite::Row) -> rusqlite::Result<SnapshotRow> {
    Ok(SnapshotRow {
        key: row.get(0)?,
        payload: row.get(1)?,
        saved_at: row.get(2)?,
    })
}
