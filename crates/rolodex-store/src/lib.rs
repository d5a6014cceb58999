pub mod contact_store;
pub mod error;
pub mod input;
pub mod migrate;
pub mod paths;
pub mod repo;
pub mod storage;

pub use contact_store::{
    ContactStore, LoadOptions, Seeded, Snapshot, CONTACTS_KEY, INTERACTIONS_KEY,
};
pub use input::{ContactNew, ContactUpdate, InteractionNew};
pub use storage::{MemoryStorage, Storage};

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// SQLite-backed key-value storage.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        restrict_db_permissions(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 2000)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn entries(&self) -> repo::EntriesRepo<'_> {
        repo::EntriesRepo::new(&self.conn)
    }
}

impl Storage for Store {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.entries().get(key)
    }

    fn write_batch(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        match entries {
            [(key, value)] => self.entries().put(key, value),
            _ => self.entries().put_all(entries),
        }
    }
}

#[cfg(unix)]
fn restrict_db_permissions(path: &Path) -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn restrict_db_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
