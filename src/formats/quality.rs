//! Quality metrics (`QMetricsOut.bin`).
//!
//! Versions 4 and 5, 206 bytes per record:
//!
//! | Offset | Size  | Name      | Type   |
//! | ------ | ----- | --------- | ------ |
//! | 0      | 2     | lane      | uint16 |
//! | 2      | 2     | tile      | uint16 |
//! | 4      | 2     | cycle     | uint16 |
//! | 6      | 4x50  | histogram | uint32 |
//!
//! The histogram counts bases observed at quality scores 1..=50.
//!
//! Version 5 extends the header with a binning flag byte. When the flag is
//! set a bin table follows: a bin count, then the lower bounds, upper
//! bounds, and remapped scores as three grouped byte arrays. Binned files
//! still write full 50-bucket histograms, so the record layout is version
//! independent; the table only describes how scores were collapsed and is
//! validated and consumed here, with remapping left to downstream reporting.

use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::format::MetricFormat;

/// Number of quality-score buckets in each record's histogram.
pub const QUALITY_BUCKETS: usize = 50;

/// Per-cycle quality-score histogram for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityMetric {
    /// Lane number
    pub lane: u16,
    /// Tile number
    pub tile: u16,
    /// Cycle number
    pub cycle: u16,
    /// Number of bases observed at quality score `i + 1`
    pub histogram: [u32; QUALITY_BUCKETS],
}

/// Format descriptor for `QMetricsOut.bin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityMetricsFormat;

impl QualityMetricsFormat {
    fn invalid(&self, field: &'static str, value: u8) -> crate::Error {
        DecodeError::InvalidFieldValue {
            format: self.name(),
            field,
            value: i64::from(value),
        }
        .into()
    }
}

impl MetricFormat for QualityMetricsFormat {
    type Record = QualityMetric;

    fn name(&self) -> &'static str {
        "QMetricsOut"
    }

    fn accepted_versions(&self) -> &'static [u8] {
        &[4, 5]
    }

    fn record_size(&self, _version: u8) -> usize {
        6 + 4 * QUALITY_BUCKETS
    }

    fn read_header_flags(&self, cursor: &mut ByteCursor<'_>, version: u8) -> Result<()> {
        if version < 5 {
            return Ok(());
        }

        let binned = cursor.read_u8()?;
        match binned {
            0 => Ok(()),
            1 => {
                let bin_count = cursor.read_u8()?;
                if bin_count == 0 || bin_count as usize > QUALITY_BUCKETS {
                    return Err(self.invalid("bin count", bin_count));
                }
                let lower = cursor.take(bin_count as usize)?;
                let upper = cursor.take(bin_count as usize)?;
                cursor.skip(bin_count as usize)?; // remapped scores
                for (low, up) in lower.iter().zip(upper) {
                    if low > up {
                        return Err(self.invalid("bin lower bound", *low));
                    }
                }
                Ok(())
            }
            flag => Err(self.invalid("binned flag", flag)),
        }
    }

    fn decode_record(&self, cursor: &mut ByteCursor<'_>, _version: u8) -> Result<QualityMetric> {
        let lane = cursor.read_u16_le()?;
        let tile = cursor.read_u16_le()?;
        let cycle = cursor.read_u16_le()?;

        let mut histogram = [0u32; QUALITY_BUCKETS];
        for bucket in &mut histogram {
            *bucket = cursor.read_u32_le()?;
        }

        Ok(QualityMetric {
            lane,
            tile,
            cycle,
            histogram,
        })
    }
}
