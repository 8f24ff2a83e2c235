use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by the native shell. Always recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),

    #[error("{operation} failed: {reason}")]
    Failed {
        operation: &'static str,
        reason: String,
    },
}

/// Programmer error: a store was requested from a scope that does not provide it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    #[error("translation requested outside of a language scope")]
    OutsideLanguageScope,

    #[error("theme requested outside of a theme scope")]
    OutsideThemeScope,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
