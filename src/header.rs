//! Header module for the binmetrics library
//!
//! Every binary metrics file opens with a two-byte prefix: the format version
//! and the declared per-record byte length. Formats with a header extension
//! consume additional bytes immediately after the prefix through their
//! [`MetricFormat::read_header_flags`] hook. Both prefix fields are validated
//! against the format before any record is decoded, because a mis-validated
//! header would mis-align every subsequent record in the file.

use crate::cursor::ByteCursor;
use crate::error::{HeaderError, Result};
use crate::format::MetricFormat;

/// Size of the fixed header prefix in bytes: one byte for the file version
/// number and one for the length of each record.
pub const HEADER_SIZE: usize = 2;

/// The validated two-byte metrics header.
///
/// Transient: extracted once per region during validation and not retained
/// once record decoding begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsHeader {
    /// File format version number
    pub version: u8,

    /// Declared length of each record in bytes, excluding the header
    pub record_size: u8,
}

impl MetricsHeader {
    /// Reads and validates the header at the cursor's current position.
    ///
    /// Checks, in order:
    /// 1. the version byte is a member of the format's accepted set;
    /// 2. the format's header-flag hook consumes any extension bytes;
    /// 3. the declared record size equals the format's expectation for the
    ///    validated version.
    ///
    /// The first failure aborts the read; no records are decoded after a
    /// header error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * fewer than [`HEADER_SIZE`] bytes remain in the region
    /// * the version is not accepted ([`HeaderError::UnsupportedVersion`])
    /// * the header-flag hook fails
    /// * the declared record size disagrees with the format
    ///   ([`HeaderError::RecordSizeMismatch`])
    pub fn read<F: MetricFormat>(cursor: &mut ByteCursor<'_>, format: &F) -> Result<Self> {
        let version = cursor.read_u8()?;
        if !format.accepted_versions().contains(&version) {
            return Err(HeaderError::UnsupportedVersion {
                format: format.name(),
                accepted: format.accepted_versions().to_vec(),
                actual: version,
            }
            .into());
        }

        let record_size = cursor.read_u8()?;

        format.read_header_flags(cursor, version)?;

        let expected = format.record_size(version);
        if expected != record_size as usize {
            return Err(HeaderError::RecordSizeMismatch {
                format: format.name(),
                expected,
                declared: record_size as usize,
            }
            .into());
        }

        Ok(Self {
            version,
            record_size,
        })
    }
}
