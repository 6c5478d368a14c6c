use crate::error::{JotzError, Result};
use crate::model::{Area, TrackedEntry};
use std::fs;
use std::path::Path;

/// How many created names are retained before the oldest is evicted.
pub const TRACKED_CAPACITY: usize = 3;

const TRACKED_FILENAME: &str = "tracked.json";

/// Insertion-ordered record of the names most recently created through the
/// store, bounded to [`TRACKED_CAPACITY`] entries.
///
/// The list is plain in-memory state: nothing here reads a storage area, and
/// it is never reconciled with what is actually on disk. A caller that wants
/// the list to outlive the process snapshots it with [`TrackedList::save`]
/// and seeds the next one via [`TrackedList::load`]. The list itself never
/// deletes record files; [`TrackedList::push`] hands the evicted entry back
/// so the caller can.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedList {
    entries: Vec<TrackedEntry>,
}

impl TrackedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from snapshot entries. Anything beyond capacity is
    /// dropped oldest-first; no files are touched.
    pub fn from_entries(mut entries: Vec<TrackedEntry>) -> Self {
        if entries.len() > TRACKED_CAPACITY {
            let excess = entries.len() - TRACKED_CAPACITY;
            entries.drain(..excess);
        }
        Self { entries }
    }

    /// Entries in insertion (recency) order, oldest first.
    pub fn entries(&self) -> &[TrackedEntry] {
        &self.entries
    }

    /// Tracked names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, area: Area, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.area == area && e.name == name)
    }

    /// Append an entry. When the list ends up past capacity the oldest entry
    /// (index 0) is removed and returned so the caller can delete its file.
    pub fn push(&mut self, entry: TrackedEntry) -> Option<TrackedEntry> {
        self.entries.push(entry);
        if self.entries.len() > TRACKED_CAPACITY {
            Some(self.entries.remove(0))
        } else {
            None
        }
    }

    /// Remove the entry matching (area, name), if present.
    pub fn remove(&mut self, area: Area, name: &str) -> Option<TrackedEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.area == area && e.name == name)?;
        Some(self.entries.remove(pos))
    }

    /// Load a snapshot from `tracked.json` in the given directory, or an
    /// empty list when no snapshot exists.
    pub fn load<P: AsRef<Path>>(state_dir: P) -> Result<Self> {
        let path = state_dir.as_ref().join(TRACKED_FILENAME);
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(&path).map_err(JotzError::Io)?;
        let entries: Vec<TrackedEntry> =
            serde_json::from_str(&content).map_err(JotzError::Serialization)?;
        Ok(Self::from_entries(entries))
    }

    /// Save a snapshot as `tracked.json` in the given directory.
    pub fn save<P: AsRef<Path>>(&self, state_dir: P) -> Result<()> {
        let state_dir = state_dir.as_ref();
        if !state_dir.exists() {
            fs::create_dir_all(state_dir).map_err(JotzError::Io)?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(JotzError::Serialization)?;
        fs::write(state_dir.join(TRACKED_FILENAME), content).map_err(JotzError::Io)?;
        Ok(())
    }
}
