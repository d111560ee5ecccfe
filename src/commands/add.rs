use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Store, TableStore};

pub fn run<S: TableStore>(store: &mut Store<S>, record: Record) -> Result<CmdResult> {
    let name = record.food_item.clone();
    store.add(record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record added: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn appends_at_the_tail() {
        let mut store = fixtures::seeded_store();
        let before = store.len();

        run(&mut store, Record::new("Toast", 75.0, 2.6, 13.0)).unwrap();

        assert_eq!(store.len(), before + 1);
        let added = store.records().last().unwrap();
        assert_eq!(added.food_item, "Toast");
        assert_eq!(added.calories, 75.0);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut store = fixtures::empty_store();
        run(&mut store, Record::new("Egg", 78.0, 6.0, 0.6)).unwrap();
        run(&mut store, Record::new("Egg", 78.0, 6.0, 0.6)).unwrap();
        assert_eq!(store.len(), 2);
    }
}
