//! # Storage Layer
//!
//! This module defines the storage abstraction for jotz. The [`RecordStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Keep eviction and the other command logic **decoupled** from
//!   persistence details
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production file-based storage
//!   - One plain file per record, named after the record
//!   - Flat layout, no subdirectories
//!   - Area roots are created lazily on first write
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Area Pattern
//!
//! All operations take an [`Area`] parameter:
//! - `Area::Persistent`: durable storage, files survive until deleted
//! - `Area::Cache`: the OS cache tier, files may be reclaimed
//!
//! The store treats the two identically; the distinction is purely which
//! root directory the bytes land under. The same name may exist in both
//! areas at once, as two independent records.

use crate::error::Result;
use crate::model::Area;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
///
/// Implementations must handle the two areas independently: an operation
/// only ever sees the area it was given.
pub trait RecordStore {
    /// Create a new empty record; fails if the name is taken in this area
    fn create(&mut self, area: Area, name: &str) -> Result<()>;

    /// Replace a record's content wholesale, creating it if missing
    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<()>;

    /// Get a record's raw stored content
    fn read(&self, area: Area, name: &str) -> Result<String>;

    /// Delete a record permanently
    fn delete(&mut self, area: Area, name: &str) -> Result<()>;

    /// Get the file path a record occupies in this area (for file-based stores)
    fn path(&self, area: Area, name: &str) -> Result<PathBuf>;
}
