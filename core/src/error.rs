use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("Line {line}: missing required field '{field}'")]
    MissingField { line: u64, field: &'static str },

    #[error("Line {line}: invalid amount '{value}'")]
    InvalidAmount { line: u64, value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
