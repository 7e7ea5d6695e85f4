use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range {start}..{end} is invalid for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("operation requires a non-empty sequence")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ListError>;
