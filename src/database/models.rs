use chrono::NaiveDateTime;

/// Raw row of the key-value snapshot table
#[derive(Debug, Clone)]
pub struct SnapshotRow {
    pub key: String,
    pub payload: String,
    pub saved_at: NaiveDateTime,
}
