//! # Nutrack Architecture
//!
//! Nutrack is a **UI-agnostic record-keeping library** with a menu-driven
//! binary on top. The binary is thin glue; everything with behavior worth
//! testing lives in the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, menu.rs, print.rs)                        │
//! │  - Menu loop, prompt coercion, colored output               │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Takes typed selectors, returns structured Results        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: CRUD, analytics, filtering               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Store owns the ordered record sequence                   │
//! │  - TableStore trait: CsvTable (prod), InMemoryTable (test)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never assumes a
//! terminal. The same core could serve any other front end.
//!
//! ## The Persistence Contract
//!
//! The durable table is always a complete snapshot of the in-memory
//! sequence: every successful mutation rewrites the whole backing file.
//! There is no dirty flag and no incremental diffing; the data sets this
//! tool targets are small, human-curated lists.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: The record store and its storage backends
//! - [`model`]: Core data types (`Record`, `Field`, `NumericField`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
