use thiserror::Error;
use toc_core::TocError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid line setting: {0}")]
    Core(#[from] TocError),
}

pub type SimResult<T> = Result<T, SimError>;
