use std::path::PathBuf;

/// Custom Result type for binmetrics operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the binmetrics library, encompassing all possible
/// error cases that can occur while decoding a binary metrics file.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors related to metrics header validation
    HeaderError(#[from] HeaderError),
    /// Errors that occur while loading or slicing the byte region
    ReadError(#[from] ReadError),
    /// Format-specific errors raised while decoding a single record
    DecodeError(#[from] DecodeError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// Generic errors that format implementations may raise
    AnyhowError(#[from] anyhow::Error),
}

/// Errors specific to validating the two-byte metrics header
#[derive(thiserror::Error, Debug)]
pub enum HeaderError {
    /// The version byte is not a member of the format's accepted set
    #[error("{format} expects the version number to be one of {accepted:?}, found {actual} in header")]
    UnsupportedVersion {
        /// Name of the format whose reader rejected the file
        format: &'static str,
        /// The versions the format accepts
        accepted: Vec<u8>,
        /// The version byte found in the file
        actual: u8,
    },

    /// The declared record size disagrees with the format's expectation
    /// for the validated version
    #[error("{format} expects the record size to be {expected}, found {declared} in header")]
    RecordSizeMismatch {
        /// Name of the format whose reader rejected the file
        format: &'static str,
        /// The record size the format expects for this version
        expected: usize,
        /// The record size declared in the file header
        declared: usize,
    },
}

/// Errors that can occur while loading or traversing the byte region
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The metrics file path does not resolve to readable content
    #[error("Metrics file does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// The path resolves to something other than a regular file
    /// (e.g., a directory or special file)
    #[error("File is not regular")]
    IncompatibleFile,

    /// A read was attempted past the end of the region, typically because a
    /// multi-byte field straddles the end of a truncated file
    #[error("Read of {requested} bytes at position {position} is out of bounds ({remaining} bytes remain)")]
    OutOfBounds {
        /// Cursor position when the read was attempted
        position: usize,
        /// Number of bytes requested
        requested: usize,
        /// Number of bytes remaining in the region
        remaining: usize,
    },
}

/// Format-specific errors raised while decoding record or header-flag bytes.
///
/// Any of these aborts the whole scan; partial results are discarded.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// A wire field holds a value outside the format's valid range
    #[error("Invalid value {value} for field `{field}` in {format}")]
    InvalidFieldValue {
        /// Name of the format that rejected the value
        format: &'static str,
        /// Name of the offending field
        field: &'static str,
        /// The value found on the wire, widened for display
        value: i64,
    },
}
