use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, FieldValue, Record};
use crate::store::{Store, TableStore};

/// The ordered subsequence of records whose `field` equals `value` exactly.
/// No match is an empty result, not an error.
pub fn run<S: TableStore>(store: &Store<S>, field: Field, value: &FieldValue) -> Result<CmdResult> {
    let matches: Vec<Record> = store
        .records()
        .iter()
        .filter(|record| field.get(record) == *value)
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No records where {} = {}",
            field, value
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} records where {} = {}",
            matches.len(),
            field,
            value
        )));
    }
    Ok(result.with_records(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryTable;

    fn seeded() -> Store<InMemoryTable> {
        let rows = vec![
            Record::new("A", 100.0, 1.0, 10.0),
            Record::new("B", 200.0, 2.0, 20.0),
            Record::new("C", 200.0, 3.0, 30.0),
        ];
        let mut store = Store::new(InMemoryTable::seeded(rows));
        store.load().unwrap();
        store
    }

    #[test]
    fn numeric_filter_compares_numbers_not_strings() {
        let store = seeded();
        let result = run(&store, Field::Calories, &FieldValue::Number(200.0)).unwrap();

        let names: Vec<&str> = result.records.iter().map(|r| r.food_item.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn name_filter_uses_string_equality() {
        let store = seeded();
        let result = run(
            &store,
            Field::FoodItem,
            &FieldValue::Text("A".to_string()),
        )
        .unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].calories, 100.0);
    }

    #[test]
    fn no_match_returns_an_empty_sequence() {
        let store = seeded();
        let result = run(
            &store,
            Field::FoodItem,
            &FieldValue::Text("Z".to_string()),
        )
        .unwrap();

        assert!(result.records.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }
}
