use thiserror::Error;

/// Failure of the analytical core. An empty signal list is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("insufficient data: need at least {required} candles, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("malformed kline row {row}: {msg}")]
    Kline { row: usize, msg: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
