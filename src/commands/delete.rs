use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Store, TableStore};

/// Remove the record at `index`; later records shift down by one. An
/// out-of-range index is a silent no-op, matching `edit`.
pub fn run<S: TableStore>(store: &mut Store<S>, index: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(removed) = store.delete(index)? {
        result.add_message(CmdMessage::success(format!(
            "Record {} deleted: {}",
            index, removed.food_item
        )));
    }
    Ok(result)
}
