use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ToSql;
use rusqlite::Connection;

use crate::record::JobRecord;

pub fn connect(path: &Path) -> Result<Connection> {
    Connection::open(path).with_context(|| format!("Failed to open {:?}", path))
}

/// Drop and recreate the jobs table. Prior rows are lost on every run;
/// running this twice leaves the table present and empty both times.
pub fn init_schema(conn: &Connection) -> Result<()> {
    let columns = JobRecord::columns();
    let (flags, texts) = columns.split_at(columns.len() - 3);

    let mut defs: Vec<String> = flags
        .iter()
        .map(|col| format!("{} NUMERIC NOT NULL DEFAULT 0", col))
        .collect();
    defs.extend(texts.iter().map(|col| format!("{} TEXT", col)));

    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS jobs;\n         CREATE TABLE jobs ({});",
        defs.join(", ")
    ))?;
    Ok(())
}

/// One short-lived connection per record: open, insert (autocommit), close.
/// No batching and no transaction spanning records.
pub fn insert_record(path: &Path, record: &JobRecord) -> Result<()> {
    let conn = connect(path)?;
    insert(&conn, record)
}

pub fn insert(conn: &Connection, record: &JobRecord) -> Result<()> {
    let columns = JobRecord::columns();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO jobs ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );

    let mut params: Vec<Box<dyn ToSql>> = record
        .flags
        .iter()
        .map(|flag| Box::new(i64::from(*flag)) as Box<dyn ToSql>)
        .collect();
    params.push(Box::new(record.title.clone()));
    params.push(Box::new(record.location.clone()));
    params.push(Box::new(record.url.clone()));

    let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
    conn.execute(&sql, param_refs.as_slice())?;
    Ok(())
}

// ── Tests ──
