use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::TableStore;
use crate::error::{NutrackError, Result};
use crate::model::Record;

/// Column order of the backing table. Data rows are parsed positionally
/// against this layout; the header row itself is skipped, not validated.
pub const HEADER: [&str; 4] = ["food_item", "calories", "protein", "carbs"];

/// Production backend: a UTF-8, comma-delimited table file.
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse one data row. `row` is the 1-based data-row number used in
    /// error reports.
    fn parse_row(record: &StringRecord, row: usize) -> Result<Record> {
        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| NutrackError::Format {
                row,
                reason: format!("missing {} column", name),
            })
        };

        let food_item = field(0, "food_item")?.to_string();
        let calories = parse_number(field(1, "calories")?, "calories", row)?;
        let protein = parse_number(field(2, "protein")?, "protein", row)?;
        let carbs = parse_number(field(3, "carbs")?, "carbs", row)?;

        Ok(Record {
            food_item,
            calories,
            protein,
            carbs,
        })
    }
}

fn parse_number(raw: &str, name: &str, row: usize) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| NutrackError::Format {
        row,
        reason: format!("{} is not a number: '{}'", name, raw),
    })
}

/// Split a csv-crate error: io problems are storage errors, everything
/// else is a malformed-table error.
fn read_error(row: usize, err: csv::Error) -> NutrackError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => NutrackError::Storage(e),
        _ => NutrackError::Format { row, reason },
    }
}

fn write_error(err: csv::Error) -> NutrackError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => NutrackError::Storage(e),
        other => NutrackError::Storage(io::Error::other(format!("{:?}", other))),
    }
}

impl TableStore for CsvTable {
    fn read_all(&self) -> Result<Vec<Record>> {
        let file = fs::File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row_number = idx + 1;
            let row = row.map_err(|e| read_error(row_number, e))?;
            records.push(Self::parse_row(&row, row_number)?);
        }
        Ok(records)
    }

    fn write_all(&mut self, records: &[Record]) -> Result<()> {
        // Write the complete replacement next to the target, then rename it
        // into place; an interrupted save never leaves a half-written table.
        let tmp = self.path.with_extension("tmp");
        {
            let file = fs::File::create(&tmp)?;
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
            writer.write_record(HEADER).map_err(write_error)?;
            for record in records {
                writer.serialize(record).map_err(write_error)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
