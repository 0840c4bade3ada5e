//! Sequential big-endian reader over a decompressed table stream.

use super::error::{Field, TableError};

/// Cursor over an in-memory byte buffer.
///
/// Every read names the schema [`Field`] it belongs to so a short stream can
/// be reported precisely.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take<const N: usize>(&mut self, field: Field) -> Result<[u8; N], TableError> {
        let end = self.pos + N;
        let Some(slice) = self.bytes.get(self.pos..end) else {
            return Err(self.end_of_stream(field, N));
        };
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        self.pos = end;
        Ok(buf)
    }

    fn end_of_stream(&self, field: Field, needed: usize) -> TableError {
        TableError::UnexpectedEndOfStream {
            field,
            needed,
            remaining: self.remaining(),
        }
    }

    /// Read a big-endian `i32`.
    pub fn read_i32(&mut self, field: Field) -> Result<i32, TableError> {
        self.take::<4>(field).map(i32::from_be_bytes)
    }

    /// Read a big-endian `i16`.
    pub fn read_i16(&mut self, field: Field) -> Result<i16, TableError> {
        self.take::<2>(field).map(i16::from_be_bytes)
    }

    /// Read a non-negative `i32` element count.
    pub fn read_count(&mut self, field: Field) -> Result<usize, TableError> {
        let count = self.read_i32(field)?;
        usize::try_from(count).map_err(|_| TableError::InvalidCount { field, count })
    }

    /// Read `count` consecutive `i16` values.
    ///
    /// The whole run is bounds-checked up front, so a corrupt count fails
    /// before anything is allocated.
    pub fn read_i16_array(&mut self, count: usize, field: Field) -> Result<Vec<i16>, TableError> {
        self.ensure(count, 2, field)?;
        (0..count).map(|_| self.read_i16(field)).collect()
    }

    /// Read `count` consecutive `i32` values.
    pub fn read_i32_array(&mut self, count: usize, field: Field) -> Result<Vec<i32>, TableError> {
        self.ensure(count, 4, field)?;
        (0..count).map(|_| self.read_i32(field)).collect()
    }

    fn ensure(&self, count: usize, width: usize, field: Field) -> Result<(), TableError> {
        let needed = count.saturating_mul(width);
        if needed > self.remaining() {
            return Err(self.end_of_stream(field, needed));
        }
        Ok(())
    }
}
