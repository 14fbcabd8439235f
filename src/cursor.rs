//! Bounded little-endian cursor over an immutable byte region.
//!
//! Every multi-byte field in a metrics file is little-endian, and every
//! numeric field is unsigned on the wire. The cursor exposes typed reads that
//! advance a forward-only position and fail with
//! [`ReadError::OutOfBounds`](crate::ReadError::OutOfBounds) when fewer bytes
//! remain than a read requires. The underlying bytes are never mutated.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{ReadError, Result};

/// A forward-only view over a byte region with typed little-endian reads.
///
/// The cursor borrows the region; slices returned by [`ByteCursor::take`]
/// remain valid for the region's lifetime, not the cursor's.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns the current position within the region.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Returns `true` if the cursor has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes and returns the next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(ReadError::OutOfBounds {
                position: self.pos,
                requested: len,
                remaining: self.remaining(),
            }
            .into());
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.bytes[start..self.pos])
    }

    /// Advances the cursor by `len` bytes without returning them.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Reads one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Reads an unsigned 16-bit little-endian integer.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(LittleEndian::read_u16(bytes))
    }

    /// Reads an unsigned 32-bit little-endian integer.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(LittleEndian::read_u32(bytes))
    }

    /// Reads an IEEE-754 single-precision little-endian float.
    pub fn read_f32_le(&mut self) -> Result<f32> {
        let bytes = self.take(4)?;
        Ok(LittleEndian::read_f32(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ReadError};

    #[test]
    fn scalar_reads_advance_in_order() -> Result<()> {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_u8()?, 0x01);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16_le()?, 0x0302);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read_u32_le()?, 0x0706_0504);
        assert_eq!(cursor.position(), 7);
        assert!(cursor.is_empty());
        Ok(())
    }

    #[test]
    fn full_unsigned_range_is_preserved() -> Result<()> {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_u8()?, u8::MAX);
        assert_eq!(cursor.read_u16_le()?, u16::MAX);
        assert_eq!(cursor.read_u32_le()?, u32::MAX);
        Ok(())
    }

    #[test]
    fn float_read_is_little_endian() -> Result<()> {
        let bytes = 1.5f32.to_le_bytes();
        let mut cursor = ByteCursor::new(&bytes);
        assert!((cursor.read_f32_le()? - 1.5).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn straddling_read_is_out_of_bounds() {
        let bytes = [0xAA, 0xBB, 0xCC];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.read_u8().unwrap();

        let err = cursor.read_u32_le().unwrap_err();
        match err {
            Error::ReadError(ReadError::OutOfBounds {
                position,
                requested,
                remaining,
            }) => {
                assert_eq!(position, 1);
                assert_eq!(requested, 4);
                assert_eq!(remaining, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failed_read_does_not_advance() {
        let bytes = [0xAA];
        let mut cursor = ByteCursor::new(&bytes);
        assert!(cursor.read_u16_le().is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn take_and_skip() -> Result<()> {
        let bytes = [1, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.skip(2)?;
        assert_eq!(cursor.take(2)?, &[3, 4]);
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.take(2).is_err());
        Ok(())
    }
}
