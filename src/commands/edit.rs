use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Store, TableStore};

/// Full replacement of the record at `index`. An out-of-range index is a
/// silent no-op: nothing changes, nothing is saved, and no message is
/// produced.
pub fn run<S: TableStore>(store: &mut Store<S>, index: usize, record: Record) -> Result<CmdResult> {
    let name = record.food_item.clone();
    let mut result = CmdResult::default();

    if store.edit(index, record)? {
        result.add_message(CmdMessage::success(format!(
            "Record {} updated: {}",
            index, name
        )));
    }
    Ok(result)
}
