//! Error types for CLB file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing CLB files.
#[derive(Debug, Error)]
pub enum ClbError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Buffer shorter than the 6-byte header.
    #[error("truncated header: buffer holds {len} bytes")]
    TruncatedHeader { len: usize },

    /// Magic value does not identify a CLB file.
    #[error("bad magic {found:#06x}: not a CLB file")]
    BadMagic { found: u16 },

    /// Declared record count is negative.
    #[error("negative record count {count}")]
    NegativeCount { count: i32 },

    /// A record field read ran past the end of the buffer.
    #[error("truncated record {index} at offset {offset}")]
    TruncatedRecord { index: usize, offset: usize },

    /// Bytes remain after the declared number of records.
    #[error("{extra} trailing bytes after last record")]
    TrailingBytes { extra: usize },

    /// Date field holds non-ASCII bytes.
    #[error("record {index}: date field is not 8-bit ASCII text")]
    DateEncoding { index: usize },

    /// Brand length prefix is negative.
    #[error("record {index}: negative brand length {len}")]
    NegativeBrandLength { index: usize, len: i16 },

    /// Brand name bytes are not valid UTF-16.
    #[error("record {index}: brand name is not valid UTF-16")]
    BrandEncoding { index: usize },

    /// Date is not exactly 8 ASCII characters (encode precondition).
    #[error("record {index}: date {date:?} is not exactly 8 ASCII characters")]
    DateNotFixedWidth { index: usize, date: String },

    /// Brand name exceeds the i16 length prefix.
    #[error("record {index}: brand name of {units} code units exceeds length prefix")]
    BrandTooLong { index: usize, units: usize },

    /// Record count exceeds the i32 header field.
    #[error("record count {count} exceeds header field")]
    TooManyRecords { count: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLB operations.
pub type Result<T> = std::result::Result<T, ClbError>;

impl ClbError {
    /// Create a TruncatedRecord error.
    pub fn truncated_record(index: usize, offset: usize) -> Self {
        Self::TruncatedRecord { index, offset }
    }

    /// Create a DateNotFixedWidth error.
    pub fn date_not_fixed_width(index: usize, date: impl Into<String>) -> Self {
        Self::DateNotFixedWidth {
            index,
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClbError::BadMagic { found: 0x4d42 };
        assert_eq!(format!("{err}"), "bad magic 0x4d42: not a CLB file");

        let err = ClbError::truncated_record(2, 40);
        assert_eq!(format!("{err}"), "truncated record 2 at offset 40");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let clb_err: ClbError = io_err.into();
        assert!(matches!(clb_err, ClbError::Io(_)));
    }
}
