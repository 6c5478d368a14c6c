use super::CmdResult;
use crate::error::Result;
use crate::model::Area;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, area: Area, name: &str) -> Result<CmdResult> {
    // The record does not have to exist for its path to resolve.
    let path = store.path(area, name)?;
    Ok(CmdResult::default().with_paths(vec![path]))
}
