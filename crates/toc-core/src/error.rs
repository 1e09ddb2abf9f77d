//! Framework error type.
//!
//! The round engine itself never fails; these errors only arise at the edges
//! where raw numbers or files are turned into typed configuration.

use thiserror::Error;

/// The top-level error type for `toc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TocError {
    #[error("stage {0} is out of range (expected 1..=6)")]
    InvalidStage(u8),

    #[error("unknown lead-time method {0} (expected 1..=4)")]
    InvalidLeadTimeMethod(u8),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `toc-*` crates.
pub type TocResult<T> = Result<T, TocError>;
