use super::CmdResult;
use crate::error::Result;
use crate::tracked::TrackedList;

/// List the tracked entries, oldest first. Only names that went through
/// create appear here; the list is not reconciled with the filesystem.
pub fn run(tracked: &TrackedList) -> Result<CmdResult> {
    Ok(CmdResult::default().with_tracked(tracked.entries().to_vec()))
}
