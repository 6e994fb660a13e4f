use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlasError {
    /// The backend binary could not be opened. The OS diagnostic is kept
    /// verbatim in `reason`; it is not interpreted here.
    #[error("cannot load blas backend {}: {reason}", path.display())]
    LibraryNotFound { path: PathBuf, reason: String },

    /// The binary opened but does not export a required entry point.
    #[error("blas backend is missing symbol {0}")]
    SymbolNotFound(&'static str),

    /// The OS reported an error while closing the backend handle. The
    /// handle is considered gone regardless; this is a leak report, not
    /// a retryable condition.
    #[error("failed to close blas backend: {0}")]
    CloseFailed(String),
}

pub type BlasResult<T> = Result<T, BlasError>;
