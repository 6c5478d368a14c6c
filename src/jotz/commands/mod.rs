//! Command implementations.
//!
//! Each command is a free function taking the store (and tracked list where
//! it applies) plus its own arguments, and returning a [`CmdResult`]. The
//! result carries data for the caller to render and messages for the caller
//! to display; commands never print.

use crate::config::JotzConfig;
use crate::model::{Jot, TrackedEntry};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod paths;
pub mod read;
pub mod write;

/// Severity of a message produced by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing message produced by a command.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced: data for rendering plus messages to display.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records the command operated on, with their content.
    pub jots: Vec<Jot>,
    /// Tracked entries, for the list command.
    pub tracked: Vec<TrackedEntry>,
    /// Filesystem locations, for the path command.
    pub paths: Vec<PathBuf>,
    /// Entry evicted from tracking as a side effect, if any.
    pub evicted: Option<TrackedEntry>,
    /// Configuration snapshot, for the config command.
    pub config: Option<JotzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_jots(mut self, jots: Vec<Jot>) -> Self {
        self.jots = jots;
        self
    }

    pub fn with_tracked(mut self, tracked: Vec<TrackedEntry>) -> Self {
        self.tracked = tracked;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: JotzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
