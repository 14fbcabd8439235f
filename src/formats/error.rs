//! Error metrics (`ErrorMetricsOut.bin`).
//!
//! Version 3, thirty bytes per record:
//!
//! | Offset | Size | Name       | Type    |
//! | ------ | ---- | ---------- | ------- |
//! | 0      | 2    | lane       | uint16  |
//! | 2      | 2    | tile       | uint16  |
//! | 4      | 2    | cycle      | uint16  |
//! | 6      | 4    | error rate | float32 |
//! | 10     | 4x5  | read counts with 0..=4 errors | uint32 |

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::format::MetricFormat;

/// Per-cycle alignment error rate for one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetric {
    /// Lane number
    pub lane: u16,
    /// Tile number
    pub tile: u16,
    /// Cycle number
    pub cycle: u16,
    /// Percentage of bases disagreeing with the alignment reference
    pub error_rate: f32,
    /// Counts of aligned reads with exactly 0, 1, 2, 3, and 4 errors
    pub reads_with_errors: [u32; 5],
}

/// Format descriptor for `ErrorMetricsOut.bin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMetricsFormat;

impl MetricFormat for ErrorMetricsFormat {
    type Record = ErrorMetric;

    fn name(&self) -> &'static str {
        "ErrorMetricsOut"
    }

    fn accepted_versions(&self) -> &'static [u8] {
        &[3]
    }

    fn record_size(&self, _version: u8) -> usize {
        30
    }

    fn decode_record(&self, cursor: &mut ByteCursor<'_>, _version: u8) -> Result<ErrorMetric> {
        let lane = cursor.read_u16_le()?;
        let tile = cursor.read_u16_le()?;
        let cycle = cursor.read_u16_le()?;
        let error_rate = cursor.read_f32_le()?;

        let mut reads_with_errors = [0u32; 5];
        for count in &mut reads_with_errors {
            *count = cursor.read_u32_le()?;
        }

        Ok(ErrorMetric {
            lane,
            tile,
            cycle,
            error_rate,
            reads_with_errors,
        })
    }
}
