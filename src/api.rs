//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for every
//! operation, regardless of the front end driving it.
//!
//! The facade dispatches to the right command and returns structured
//! `Result<CmdResult>` values. It does no business logic (that lives in
//! `commands/*.rs`), no I/O, and no formatting. Field selectors arrive
//! already typed; parsing a raw field name via `Field::from_str` is the
//! caller's boundary, which is where unknown names become `FieldError`s.
//!
//! `NutrackApi<S: TableStore>` is generic over the storage backend:
//! `CsvTable` in production, `InMemoryTable` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Field, FieldValue, NumericField, Record};
use crate::store::{Store, TableStore};

/// The main API facade. Owns the process's single [`Store`].
pub struct NutrackApi<S: TableStore> {
    store: Store<S>,
}

impl<S: TableStore> NutrackApi<S> {
    pub fn new(backend: S) -> Self {
        Self {
            store: Store::new(backend),
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store)
    }

    pub fn add(
        &mut self,
        food_item: String,
        calories: f64,
        protein: f64,
        carbs: f64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            Record::new(food_item, calories, protein, carbs),
        )
    }

    pub fn edit(
        &mut self,
        index: usize,
        food_item: String,
        calories: f64,
        protein: f64,
        carbs: f64,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(
            &mut self.store,
            index,
            Record::new(food_item, calories, protein, carbs),
        )
    }

    pub fn delete(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    /// Mean and median of one numeric field, bundled for display.
    pub fn analyze(&self, field: NumericField) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, field)
    }

    pub fn mean(&self, field: NumericField) -> Result<f64> {
        commands::stats::mean(&self.store, field)
    }

    pub fn median(&self, field: NumericField) -> Result<f64> {
        commands::stats::median(&self.store, field)
    }

    pub fn filter(&self, field: Field, value: &FieldValue) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, field, value)
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }
}

pub use commands::{CmdMessage, CmdResult, FieldStats, MessageLevel};
