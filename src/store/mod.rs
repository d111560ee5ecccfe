//! # Storage Layer
//!
//! The [`Store`] owns the authoritative, ordered, in-memory sequence of
//! records. Durable persistence is abstracted behind the [`TableStore`]
//! trait so the same store logic runs against:
//!
//! - [`file::CsvTable`]: production backend, a comma-delimited table file
//! - [`memory::InMemoryTable`]: in-memory backend for fast, isolated tests
//!
//! ## The Save-on-Mutation Invariant
//!
//! Every successful mutation (`add`, in-range `edit`, in-range `delete`)
//! immediately rewrites the full backing table, so the durable state is
//! always a complete snapshot of the in-memory sequence. An O(n) rewrite
//! per change is fine at the data sizes this tool targets.
//!
//! ## Out-of-Range Indices
//!
//! `edit` and `delete` with an out-of-range index are silent no-ops: no
//! error, no save. This is a deliberate, documented contract (callers are
//! expected to avoid bad indices) and tests assert it; do not turn it into
//! an error.

use crate::error::Result;
use crate::model::Record;

pub mod file;
pub mod memory;

/// Abstract interface for the durable table backend.
///
/// A backend reads and writes the complete record sequence; there is no
/// partial update in the contract.
pub trait TableStore {
    /// Read every record from the backing table, in stored order.
    fn read_all(&self) -> Result<Vec<Record>>;

    /// Replace the backing table's contents with the given records.
    fn write_all(&mut self, records: &[Record]) -> Result<()>;
}

/// The in-memory record store plus its link to durable storage.
///
/// Construct exactly one per process and pass it by reference; there is no
/// hidden global instance. Independent stores (as in tests) never share
/// state.
pub struct Store<S: TableStore> {
    backend: S,
    records: Vec<Record>,
}

impl<S: TableStore> Store<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the in-memory sequence with the backing table's contents.
    ///
    /// Reads into a fresh sequence before swapping, so a failed load leaves
    /// the prior state intact.
    pub fn load(&mut self) -> Result<()> {
        let loaded = self.backend.read_all()?;
        self.records = loaded;
        Ok(())
    }

    /// Write the full in-memory sequence to the backing table.
    pub fn save(&mut self) -> Result<()> {
        self.backend.write_all(&self.records)
    }

    /// Append a record and persist. Duplicate names are allowed.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Replace the record at `index` and persist.
    ///
    /// Returns `false` without touching anything when `index` is out of
    /// range.
    pub fn edit(&mut self, index: usize, record: Record) -> Result<bool> {
        if index >= self.records.len() {
            return Ok(false);
        }
        self.records[index] = record;
        self.save()?;
        Ok(true)
    }

    /// Remove the record at `index` and persist; later records shift down
    /// by one. Returns `None` without touching anything when `index` is out
    /// of range.
    pub fn delete(&mut self, index: usize) -> Result<Option<Record>> {
        if index >= self.records.len() {
            return Ok(None);
        }
        let removed = self.records.remove(index);
        self.save()?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryTable;
    use super::*;
    use crate::error::NutrackError;

    fn record(name: &str, calories: f64) -> Record {
        Record::new(name, calories, 1.0, 2.0)
    }

    #[test]
    fn add_appends_and_persists() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("Oatmeal", 150.0)).unwrap();
        store.add(record("Egg", 78.0)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].food_item, "Egg");
        assert_eq!(store.backend.rows(), store.records());
    }

    #[test]
    fn edit_in_range_replaces_only_that_index() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("A", 100.0)).unwrap();
        store.add(record("B", 200.0)).unwrap();

        let replaced = store.edit(0, record("A2", 110.0)).unwrap();
        assert!(replaced);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].food_item, "A2");
        assert_eq!(store.records()[1].food_item, "B");
        assert_eq!(store.backend.rows(), store.records());
    }

    #[test]
    fn edit_out_of_range_is_a_silent_noop() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("A", 100.0)).unwrap();
        let before = store.records().to_vec();

        let replaced = store.edit(5, record("X", 1.0)).unwrap();
        assert!(!replaced);
        assert_eq!(store.records(), before.as_slice());
        assert_eq!(store.backend.rows(), before.as_slice());
    }

    #[test]
    fn delete_shifts_later_records_down() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("A", 100.0)).unwrap();
        store.add(record("B", 200.0)).unwrap();
        store.add(record("C", 300.0)).unwrap();

        let removed = store.delete(1).unwrap().unwrap();
        assert_eq!(removed.food_item, "B");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].food_item, "A");
        assert_eq!(store.records()[1].food_item, "C");
        assert_eq!(store.backend.rows(), store.records());
    }

    #[test]
    fn delete_out_of_range_is_a_silent_noop() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("A", 100.0)).unwrap();

        assert!(store.delete(1).unwrap().is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.backend.rows().len(), 1);
    }

    #[test]
    fn save_then_load_round_trips_the_sequence() {
        let mut store = Store::new(InMemoryTable::new());
        store.add(record("A", 100.0)).unwrap();
        store.add(record("B", 200.0)).unwrap();
        let before = store.records().to_vec();

        store.load().unwrap();
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn load_replaces_the_whole_sequence() {
        let seeded = vec![record("X", 10.0), record("Y", 20.0)];
        let mut store = Store::new(InMemoryTable::seeded(seeded));
        // In-memory-only record, never saved through this store.
        store.records.push(record("stale", 0.0));

        store.load().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].food_item, "X");
    }

    #[test]
    fn failed_load_leaves_prior_state_intact() {
        struct BrokenTable;
        impl TableStore for BrokenTable {
            fn read_all(&self) -> Result<Vec<Record>> {
                Err(NutrackError::Format {
                    row: 1,
                    reason: "broken".to_string(),
                })
            }
            fn write_all(&mut self, _records: &[Record]) -> Result<()> {
                Ok(())
            }
        }

        let mut store = Store::new(BrokenTable);
        store.add(record("A", 100.0)).unwrap();

        assert!(store.load().is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].food_item, "A");
    }
}
