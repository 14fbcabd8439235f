//! Binary metrics reader module
//!
//! This module provides the public entry point for decoding a binary metrics
//! file: validate the header against a [`MetricFormat`], then scan the
//! remaining region one fixed-size record at a time until fewer bytes than a
//! full record remain.
//!
//! Files are bounded diagnostic artifacts, so the whole region is loaded
//! before any record is decoded; path-based reads memory-map the file
//! read-only. One call performs exactly one pass and either returns the
//! complete ordered record sequence or fails atomically; there is no
//! partial-result or warning-only mode.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::cursor::ByteCursor;
use crate::error::{ReadError, Result};
use crate::format::MetricFormat;
use crate::header::MetricsHeader;

/// A generic reader for versioned binary metrics files.
///
/// The reader owns a [`MetricFormat`] value and can decode any number of
/// files or buffers with it; the format is immutable and each call is
/// independent, so callers may parallelize across files by sharing a
/// reference to one reader.
pub struct MetricsReader<F> {
    format: F,
}

impl<F: MetricFormat> MetricsReader<F> {
    /// Creates a reader for the given format.
    pub fn new(format: F) -> Self {
        Self { format }
    }

    /// Returns the format this reader decodes.
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Reads all records from a metrics file on disk.
    ///
    /// The file is memory-mapped read-only and decoded in one pass. A
    /// missing path fails with [`ReadError::SourceNotFound`] before any I/O;
    /// a non-regular file fails with [`ReadError::IncompatibleFile`].
    ///
    /// # Errors
    ///
    /// Any header validation, bounds, or record decode failure is terminal
    /// and discards records decoded so far.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<F::Record>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReadError::SourceNotFound(path.to_path_buf()).into());
        }

        // Verify input is a regular file before attempting to map
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(ReadError::IncompatibleFile.into());
        }

        // A zero-length file cannot be mapped; let the header read report it
        if metadata.len() == 0 {
            return self.read_bytes(&[]);
        }

        // Safety: the file is open and won't be modified while mapped
        let mmap = unsafe { Mmap::map(&file)? };

        self.read_bytes(&mmap)
    }

    /// Reads all records from an in-memory byte region.
    ///
    /// Steps: validate the header, then while at least one record's worth of
    /// bytes remains, slice the next record and hand it to the format's
    /// decode function. Trailing bytes shorter than one record are silently
    /// dropped; interrupted writers leave such tails and they are not an
    /// error.
    ///
    /// # Errors
    ///
    /// Propagates header validation errors and any error raised by the
    /// format's record decode; both abort the scan with no partial results.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Vec<F::Record>> {
        let mut cursor = ByteCursor::new(bytes);

        let header = MetricsHeader::read(&mut cursor, &self.format)?;
        let record_size = self.format.record_size(header.version);

        // A zero stride cannot advance the scan
        if record_size == 0 {
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(cursor.remaining() / record_size);
        while cursor.remaining() >= record_size {
            let slice = cursor.take(record_size)?;
            let mut record_cursor = ByteCursor::new(slice);
            records.push(self.format.decode_record(&mut record_cursor, header.version)?);
        }

        Ok(records)
    }
}
