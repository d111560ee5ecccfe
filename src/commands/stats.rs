use crate::commands::{CmdMessage, CmdResult, FieldStats};
use crate::error::{NutrackError, Result};
use crate::model::NumericField;
use crate::store::{Store, TableStore};

/// Mean and median of `field` over every record, as a renderable result.
pub fn run<S: TableStore>(store: &Store<S>, field: NumericField) -> Result<CmdResult> {
    let stats = analyze(store, field)?;

    let mut result = CmdResult::default().with_stats(stats);
    result.add_message(CmdMessage::info(format!("Mean {}: {}", field, stats.mean)));
    result.add_message(CmdMessage::info(format!(
        "Median {}: {}",
        field, stats.median
    )));
    Ok(result)
}

pub fn analyze<S: TableStore>(store: &Store<S>, field: NumericField) -> Result<FieldStats> {
    Ok(FieldStats {
        field,
        mean: mean(store, field)?,
        median: median(store, field)?,
    })
}

pub fn mean<S: TableStore>(store: &Store<S>, field: NumericField) -> Result<f64> {
    let values = collect(store, field)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median<S: TableStore>(store: &Store<S>, field: NumericField) -> Result<f64> {
    let mut values = collect(store, field)?;
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Mean and median are undefined over zero elements, so an empty store is
/// an error rather than a made-up zero.
fn collect<S: TableStore>(store: &Store<S>, field: NumericField) -> Result<Vec<f64>> {
    if store.is_empty() {
        return Err(NutrackError::Empty);
    }
    Ok(store.records().iter().map(|r| field.value(r)).collect())
}
