use super::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::model::{Area, TrackedEntry};
use crate::store::RecordStore;
use crate::tracked::{TrackedList, TRACKED_CAPACITY};

/// Create a new empty record and track it. When tracking exceeds capacity
/// the oldest tracked entry is evicted and its file deleted from whichever
/// area that entry was created in, not the area of this call.
pub fn run<S: RecordStore>(
    store: &mut S,
    tracked: &mut TrackedList,
    area: Area,
    name: &str,
) -> Result<CmdResult> {
    store.create(area, name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File '{}' has been created in the {} area",
        name, area
    )));

    if let Some(evicted) = tracked.push(TrackedEntry::new(name.to_string(), area)) {
        // The evicted file may already be gone (deleted out of band); that
        // still counts as a clean eviction.
        match store.delete(evicted.area, &evicted.name) {
            Ok(()) | Err(JotzError::NotFound { .. }) => {
                result.add_message(CmdMessage::info(format!(
                    "Evicted '{}' from the {} area (keeping the last {} files)",
                    evicted.name, evicted.area, TRACKED_CAPACITY
                )));
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Evicted '{}' from tracking but could not delete its file: {}",
                    evicted.name, e
                )));
            }
        }
        result.evicted = Some(evicted);
    }

    Ok(result)
}
