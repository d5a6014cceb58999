use crate::error::{Result, StoreError};
use rusqlite::{Connection, OptionalExtension};

const MIGRATIONS: &[(&str, &str)] = &[(
    "001_init.sql",
    include_str!("../migrations/001_init.sql"),
)];

pub fn run_migrations(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    let current = ensure_schema_table(&tx)?;
    let available = MIGRATIONS.len() as i64;

    if current > available {
        return Err(StoreError::Migration(format!(
            "db version {} newer than available migrations {}",
            current, available
        )));
    }

    for (version, (_name, sql)) in (1..).zip(MIGRATIONS.iter()) {
        if current >= version {
            continue;
        }
        tx.execute_batch(sql)?;
        let updated = tx.execute("UPDATE rolodex_schema SET version = ?1;", [version])?;
        if updated != 1 {
            return Err(StoreError::Migration(format!(
                "expected single schema row, updated {}",
                updated
            )));
        }
    }

    tx.commit()?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i64> {
    let version: Option<i64> = conn
        .query_row("SELECT version FROM rolodex_schema LIMIT 1;", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(version.unwrap_or(0))
}

/// Creates the version table on first run and returns the recorded version.
fn ensure_schema_table(conn: &Connection) -> Result<i64> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS rolodex_schema (version INTEGER NOT NULL);")?;
    let existing: Option<i64> = conn
        .query_row("SELECT version FROM rolodex_schema LIMIT 1;", [], |row| {
            row.get(0)
        })
        .optional()?;

    match existing {
        Some(version) => Ok(version),
        None => {
            conn.execute("INSERT INTO rolodex_schema (version) VALUES (0);", [])?;
            Ok(0)
        }
    }
}
