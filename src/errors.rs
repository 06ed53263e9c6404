use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Neither strict nor tolerant parsing recovered any record
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// A required numeric field could not be coerced to an integer
    #[error("Invalid value for field '{field}': {value}")]
    FieldType { field: String, value: String },

    /// Analysis requested on zero records
    #[error("Cannot analyse an empty dataset")]
    EmptyDataset,

    /// Substreams CLI invocation failures, propagated unchanged
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Substreams CLI error types
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The substreams binary is not installed or not on PATH
    #[error("Substreams CLI not found: {0}")]
    CliNotFound(String),

    /// Failed to spawn or wait on the child process
    #[error("Failed to run Substreams CLI: {0}")]
    Spawn(String),

    /// CLI exited with a non-zero status
    #[error("Substreams CLI failed with status {status}: {stderr}")]
    NonZeroExit { status: i32, stderr: String },

    /// CLI ran past the configured timeout
    #[error("Substreams CLI timed out after {timeout_seconds}s")]
    Timeout { timeout_seconds: u64 },

    /// No API token configured
    #[error("SUBSTREAMS_API_TOKEN is required but not configured")]
    MissingToken,
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for Substreams CLI operations
pub type UpstreamResult<T> = Result<T, UpstreamError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
