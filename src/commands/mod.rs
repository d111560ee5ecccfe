use crate::model::{NumericField, Record};

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod load;
pub mod stats;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Mean and median of one numeric field across the whole store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub field: NumericField,
    pub mean: f64,
    pub median: f64,
}

/// Structured outcome of a command, for the UI layer to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub stats: Option<FieldStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_stats(mut self, stats: FieldStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
