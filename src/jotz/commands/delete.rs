use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Area;
use crate::store::RecordStore;
use crate::tracked::TrackedList;

/// Delete a record and drop its tracked entry if it has one.
pub fn run<S: RecordStore>(
    store: &mut S,
    tracked: &mut TrackedList,
    area: Area,
    name: &str,
) -> Result<CmdResult> {
    store.delete(area, name)?;
    tracked.remove(area, name);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File '{}' has been deleted from the {} area",
        name, area
    )));
    Ok(result)
}
