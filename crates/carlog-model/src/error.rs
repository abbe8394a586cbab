use thiserror::Error;

/// Errors raised by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Index outside the current record sequence.
    #[error("record index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
