use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Area, Jot};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(
    store: &mut S,
    area: Area,
    name: &str,
    content: &str,
) -> Result<CmdResult> {
    store.write(area, name, content)?;

    let mut result = CmdResult::default().with_jots(vec![Jot::new(
        name.to_string(),
        area,
        content.to_string(),
    )]);
    result.add_message(CmdMessage::success(format!(
        "Write to '{}' successful",
        name
    )));
    Ok(result)
}
