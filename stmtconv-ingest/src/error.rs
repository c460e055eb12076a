use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// No line of the statement matched the active format profile.
    #[error("No transactions found")]
    NoTransactionsFound,

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}
