use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lead row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
