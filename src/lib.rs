//! # binmetrics
//!
//! A decoder for the versioned binary metrics files that sequencing
//! instruments drop alongside a run for diagnostics.
//!
//! Every metrics file shares one envelope:
//!
//! | Offset | Size | Name        | Description                              |
//! | ------ | ---- | ----------- | ---------------------------------------- |
//! | 0      | 1    | version     | Format version number                    |
//! | 1      | 1    | record size | Bytes per record, excluding the header   |
//! | 2      | k    | extension   | Format-specific header bytes, `k >= 0`   |
//! | 2+k    | rest | records     | Fixed-size records, file order           |
//!
//! All multi-byte fields are little-endian and all numeric wire fields are
//! unsigned. The file tail is not guaranteed to be a whole number of records
//! (an interrupted writer leaves a partial one); trailing bytes shorter than
//! one record are dropped silently.
//!
//! The envelope is generic, the record layout is not: each concrete format
//! supplies a [`MetricFormat`] strategy naming its accepted versions, its
//! per-version record stride, an optional header extension, and the record
//! decode. [`MetricsReader`] drives the pass: validate the header, then
//! slice and decode one record per stride until the region is exhausted.
//! Validation is fail-fast because a single wrong header byte would
//! mis-align every record in the file; there is no skip-and-continue mode
//! and a decode error discards everything scanned so far.
//!
//! ## Usage
//!
//! ```no_run
//! use binmetrics::formats::TileMetricsFormat;
//! use binmetrics::{MetricsReader, Result};
//!
//! fn main() -> Result<()> {
//!     let reader = MetricsReader::new(TileMetricsFormat);
//!     let metrics = reader.read_path("InterOp/TileMetricsOut.bin")?;
//!     for m in &metrics {
//!         println!("lane {} tile {} code {} = {}", m.lane, m.tile, m.code, m.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Plugging in a new format means implementing [`MetricFormat`]:
//!
//! ```
//! use binmetrics::{ByteCursor, MetricFormat, MetricsReader, Result};
//!
//! struct CycleFormat;
//!
//! impl MetricFormat for CycleFormat {
//!     type Record = (u16, u32);
//!
//!     fn name(&self) -> &'static str {
//!         "CycleFormat"
//!     }
//!     fn accepted_versions(&self) -> &'static [u8] {
//!         &[1]
//!     }
//!     fn record_size(&self, _version: u8) -> usize {
//!         6
//!     }
//!     fn decode_record(&self, cursor: &mut ByteCursor<'_>, _version: u8) -> Result<Self::Record> {
//!         Ok((cursor.read_u16_le()?, cursor.read_u32_le()?))
//!     }
//! }
//!
//! let bytes = [0x01, 0x06, 0x05, 0x00, 0x2A, 0x00, 0x00, 0x00];
//! let records = MetricsReader::new(CycleFormat).read_bytes(&bytes).unwrap();
//! assert_eq!(records, vec![(5, 42)]);
//! ```

mod cursor;
mod error;
mod format;
pub mod formats;
mod header;
mod reader;

pub use cursor::ByteCursor;
pub use error::{DecodeError, Error, HeaderError, ReadError, Result};
pub use format::MetricFormat;
pub use header::{MetricsHeader, HEADER_SIZE};
pub use reader::MetricsReader;
