use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutrackError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Malformed row {row}: {reason}")]
    Format { row: usize, reason: String },

    #[error("Unknown field: {0}")]
    Field(String),

    #[error("No records to analyze")]
    Empty,
}

pub type Result<T> = std::result::Result<T, NutrackError>;
