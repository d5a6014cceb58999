use crate::error::Result;
use std::collections::HashMap;

/// Keyed string storage the contact store persists into.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Applies all writes atomically.
    fn write_batch(&mut self, entries: &[(&str, &str)]) -> Result<()>;

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.write_batch(&[(key, value)])
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_batch(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }
}
