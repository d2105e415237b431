use thiserror::Error;

/// Any failure while writing an export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("нет колонок для экспорта")]
    NoColumns,

    #[error("CSV delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
