use anyhow::{Context, Result};

use super::connection::DbConn;

pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    for (idx, statement) in split_sql_statements(schema_sql).iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
