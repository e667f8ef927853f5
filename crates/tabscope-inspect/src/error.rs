use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    #[error("row count must be a positive integer, got {n}")]
    InvalidRowCount { n: usize },
}

pub type Result<T> = std::result::Result<T, InspectError>;
