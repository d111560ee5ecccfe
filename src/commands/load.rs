use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Store, TableStore};

pub fn run<S: TableStore>(store: &mut Store<S>) -> Result<CmdResult> {
    store.load()?;

    let mut result = CmdResult::default().with_records(store.records().to_vec());
    result.add_message(CmdMessage::info(format!(
        "Loaded {} records",
        store.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::InMemoryTable;

    #[test]
    fn loads_records_and_reports_the_count() {
        let seeded = vec![
            Record::new("Oatmeal", 150.0, 5.0, 27.0),
            Record::new("Egg", 78.0, 6.0, 0.6),
        ];
        let mut store = Store::new(InMemoryTable::seeded(seeded));

        let result = run(&mut store).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].food_item, "Oatmeal");
        assert!(result.messages[0].content.contains("2"));
    }

    #[test]
    fn loading_an_empty_table_yields_an_empty_store() {
        let mut store = Store::new(InMemoryTable::new());
        let result = run(&mut store).unwrap();
        assert!(result.records.is_empty());
        assert!(store.is_empty());
    }
}
