//! The pluggable format capability.
//!
//! Each concrete binary metrics format supplies one [`MetricFormat`]
//! implementation describing the versions it accepts, the record stride per
//! version, an optional header extension, and the record decode itself. The
//! generic reader in [`crate::reader`] drives the scan; the format only ever
//! sees cursors handed to it.

use crate::cursor::ByteCursor;
use crate::error::Result;

/// Strategy describing one concrete binary metrics format.
///
/// Implementations are immutable values: every method takes `&self`, so a
/// single format instance can be shared read-only across threads and across
/// any number of decode calls.
pub trait MetricFormat {
    /// The typed value produced for each fixed-size record.
    type Record;

    /// Short format name used in error messages.
    fn name(&self) -> &'static str;

    /// The set of format versions this reader accepts.
    fn accepted_versions(&self) -> &'static [u8];

    /// Expected byte length of one record for the given version.
    ///
    /// Only called with versions from [`MetricFormat::accepted_versions`].
    fn record_size(&self, version: u8) -> usize;

    /// Consumes format-specific header bytes following the two-byte prefix.
    ///
    /// The cursor is positioned immediately after the version and record-size
    /// bytes; an implementation may advance it further. Most formats have no
    /// header extension and keep the default no-op.
    fn read_header_flags(&self, _cursor: &mut ByteCursor<'_>, _version: u8) -> Result<()> {
        Ok(())
    }

    /// Decodes exactly one record.
    ///
    /// The cursor is bounded to exactly [`MetricFormat::record_size`] bytes
    /// for the validated version. An error here aborts the whole scan.
    fn decode_record(&self, cursor: &mut ByteCursor<'_>, version: u8) -> Result<Self::Record>;
}

impl<F: MetricFormat> MetricFormat for &F {
    type Record = F::Record;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn accepted_versions(&self) -> &'static [u8] {
        (**self).accepted_versions()
    }

    fn record_size(&self, version: u8) -> usize {
        (**self).record_size(version)
    }

    fn read_header_flags(&self, cursor: &mut ByteCursor<'_>, version: u8) -> Result<()> {
        (**self).read_header_flags(cursor, version)
    }

    fn decode_record(&self, cursor: &mut ByteCursor<'_>, version: u8) -> Result<Self::Record> {
        (**self).decode_record(cursor, version)
    }
}
