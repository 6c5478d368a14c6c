//! Public API facade.
//!
//! [`JotzApi`] is the single entry point for frontends: it owns the store
//! and the tracked list, and exposes one method per user-facing action. The
//! methods delegate to the command functions in [`crate::commands`] and
//! return their [`CmdResult`]s untouched, so any frontend (the bundled CLI
//! or something else) renders from the same data.

use crate::commands;
use crate::error::Result;
use crate::model::Area;
use crate::store::RecordStore;
use crate::tracked::TrackedList;
use std::path::Path;

pub struct JotzApi<S: RecordStore> {
    store: S,
    tracked: TrackedList,
}

impl<S: RecordStore> JotzApi<S> {
    /// An API over the given store with nothing tracked yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tracked: TrackedList::new(),
        }
    }

    /// An API seeded with a previously saved tracked list.
    pub fn with_tracked(store: S, tracked: TrackedList) -> Self {
        Self { store, tracked }
    }

    /// Create a new empty record and track it, evicting the oldest tracked
    /// record when capacity is exceeded.
    pub fn create_jot(&mut self, area: Area, name: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &mut self.tracked, area, name)
    }

    /// Replace a record's content, creating the record if needed.
    pub fn write_jot(&mut self, area: Area, name: &str, content: &str) -> Result<CmdResult> {
        commands::write::run(&mut self.store, area, name, content)
    }

    /// Read a record's content.
    pub fn read_jot(&self, area: Area, name: &str) -> Result<CmdResult> {
        commands::read::run(&self.store, area, name)
    }

    /// Delete a record and untrack it.
    pub fn delete_jot(&mut self, area: Area, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.tracked, area, name)
    }

    /// List the tracked entries, oldest first.
    pub fn list_tracked(&self) -> Result<CmdResult> {
        commands::list::run(&self.tracked)
    }

    /// Resolve the location of a record in an area.
    pub fn jot_path(&self, area: Area, name: &str) -> Result<CmdResult> {
        commands::paths::run(&self.store, area, name)
    }

    /// Show or change configuration stored in `config_dir`.
    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }

    /// The current tracked list, for callers that snapshot it.
    pub fn tracked(&self) -> &TrackedList {
        &self.tracked
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
