use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A task or notification store call failed transiently. The scanner
    /// logs this and retries on its next cycle; it never crashes the loop.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// A task's deadline text could not be parsed. The task is skipped for
    /// the current cycle only; it stays eligible for future cycles.
    #[error("malformed deadline {value:?}")]
    MalformedDeadline {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
