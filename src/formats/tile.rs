//! Tile metrics (`TileMetricsOut.bin`).
//!
//! Version 2, ten bytes per record:
//!
//! | Offset | Size | Name  | Type    |
//! | ------ | ---- | ----- | ------- |
//! | 0      | 2    | lane  | uint16  |
//! | 2      | 2    | tile  | uint16  |
//! | 4      | 2    | code  | uint16  |
//! | 6      | 4    | value | float32 |
//!
//! The code selects which per-tile statistic the value carries (cluster
//! density, cluster counts, phasing, percent aligned, control lane).

use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::format::MetricFormat;

/// One tile metric record: a single `(lane, tile)` statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMetric {
    /// Lane number
    pub lane: u16,
    /// Tile number
    pub tile: u16,
    /// Statistic selector, see [`TileMetric::is_known_code`]
    pub code: u16,
    /// Statistic value
    pub value: f32,
}

impl TileMetric {
    /// Returns `true` for the metric codes the instrument emits:
    /// 100-103 (cluster density and counts, raw and passing filter),
    /// 200-299 (per-read phasing and prephasing), 300 (percent aligned),
    /// and 400 (control lane).
    #[must_use]
    pub fn is_known_code(code: u16) -> bool {
        matches!(code, 100..=103 | 200..=299 | 300 | 400)
    }
}

/// Format descriptor for `TileMetricsOut.bin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileMetricsFormat;

impl MetricFormat for TileMetricsFormat {
    type Record = TileMetric;

    fn name(&self) -> &'static str {
        "TileMetricsOut"
    }

    fn accepted_versions(&self) -> &'static [u8] {
        &[2]
    }

    fn record_size(&self, _version: u8) -> usize {
        10
    }

    fn decode_record(&self, cursor: &mut ByteCursor<'_>, _version: u8) -> Result<TileMetric> {
        let lane = cursor.read_u16_le()?;
        let tile = cursor.read_u16_le()?;
        let code = cursor.read_u16_le()?;
        let value = cursor.read_f32_le()?;

        if !TileMetric::is_known_code(code) {
            return Err(DecodeError::InvalidFieldValue {
                format: self.name(),
                field: "code",
                value: i64::from(code),
            }
            .into());
        }

        Ok(TileMetric {
            lane,
            tile,
            code,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::MetricsReader;
    use anyhow::Result;
    use byteorder::{ByteOrder, LittleEndian};

    fn push_record(buf: &mut Vec<u8>, lane: u16, tile: u16, code: u16, value: f32) {
        let mut record = [0u8; 10];
        LittleEndian::write_u16(&mut record[0..2], lane);
        LittleEndian::write_u16(&mut record[2..4], tile);
        LittleEndian::write_u16(&mut record[4..6], code);
        LittleEndian::write_f32(&mut record[6..10], value);
        buf.extend_from_slice(&record);
    }

    #[test]
    fn round_trip() -> Result<()> {
        let mut bytes = vec![2, 10];
        push_record(&mut bytes, 1, 1101, 100, 250_000.5);
        push_record(&mut bytes, 8, 2316, 300, 98.25);

        let reader = MetricsReader::new(TileMetricsFormat);
        let records = reader.read_bytes(&bytes)?;
        assert_eq!(
            records,
            vec![
                TileMetric {
                    lane: 1,
                    tile: 1101,
                    code: 100,
                    value: 250_000.5
                },
                TileMetric {
                    lane: 8,
                    tile: 2316,
                    code: 300,
                    value: 98.25
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_code_aborts_scan() {
        let mut bytes = vec![2, 10];
        push_record(&mut bytes, 1, 1101, 100, 1.0);
        push_record(&mut bytes, 1, 1101, 999, 1.0);
        push_record(&mut bytes, 1, 1101, 101, 1.0);

        let reader = MetricsReader::new(TileMetricsFormat);
        let err = reader.read_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::DecodeError(_)));
    }

    #[test]
    fn wrong_version_is_rejected() {
        let bytes = [3u8, 10];
        let reader = MetricsReader::new(TileMetricsFormat);
        assert!(matches!(
            reader.read_bytes(&bytes).unwrap_err(),
            Error::HeaderError(_)
        ));
    }
}
