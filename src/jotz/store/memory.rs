use super::RecordStore;
use crate::error::{JotzError, Result};
use crate::model::Area;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data between program runs.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<(Area, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, area: Area, name: &str) -> Result<()> {
        let key = (area, name.to_string());
        if self.records.contains_key(&key) {
            return Err(JotzError::AlreadyExists {
                area,
                name: name.to_string(),
            });
        }
        self.records.insert(key, String::new());
        Ok(())
    }

    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<()> {
        self.records
            .insert((area, name.to_string()), content.to_string());
        Ok(())
    }

    fn read(&self, area: Area, name: &str) -> Result<String> {
        self.records
            .get(&(area, name.to_string()))
            .cloned()
            .ok_or_else(|| JotzError::NotFound {
                area,
                name: name.to_string(),
            })
    }

    fn delete(&mut self, area: Area, name: &str) -> Result<()> {
        if self.records.remove(&(area, name.to_string())).is_none() {
            return Err(JotzError::NotFound {
                area,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn path(&self, _area: Area, _name: &str) -> Result<PathBuf> {
        Err(JotzError::Store(
            "in-memory store has no file paths".to_string(),
        ))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_record(mut self, area: Area, name: &str, content: &str) -> Self {
            self.store.write(area, name, content).unwrap();
            self
        }

        pub fn with_empty_record(mut self, area: Area, name: &str) -> Self {
            self.store.create(area, name).unwrap();
            self
        }
    }
}
