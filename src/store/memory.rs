use super::TableStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory table backend for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct InMemoryTable {
    rows: Vec<Record>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table that already contains the given rows, as if a previous
    /// session had written them.
    pub fn seeded(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }
}

impl TableStore for InMemoryTable {
    fn read_all(&self) -> Result<Vec<Record>> {
        Ok(self.rows.clone())
    }

    fn write_all(&mut self, records: &[Record]) -> Result<()> {
        self.rows = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::Store;

    pub fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Oatmeal", 150.0, 5.0, 27.0),
            Record::new("Egg", 78.0, 6.0, 0.6),
            Record::new("Banana", 105.0, 1.3, 27.0),
        ]
    }

    /// A store pre-loaded with [`sample_records`].
    pub fn seeded_store() -> Store<InMemoryTable> {
        let mut store = Store::new(InMemoryTable::seeded(sample_records()));
        store.load().expect("in-memory load cannot fail");
        store
    }

    pub fn empty_store() -> Store<InMemoryTable> {
        Store::new(InMemoryTable::new())
    }
}
