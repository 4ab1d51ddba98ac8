use crate::error::DecodeError;
use byteorder::{ByteOrder, LE};

/// Read-only, bounds-checked window over the leading bytes of a file.
///
/// Every accessor validates `offset + width` against the buffer length before
/// touching the data, so arbitrary (possibly hostile) offsets taken from the
/// image itself can be passed straight through.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if `width` bytes starting at `offset` are inside the buffer.
    pub fn contains(&self, offset: usize, width: usize) -> bool {
        offset
            .checked_add(width)
            .is_some_and(|end| end <= self.data.len())
    }

    /// Fails with [`DecodeError::Truncated`] unless `width` bytes at `offset` are readable.
    pub fn ensure(&self, offset: usize, width: usize) -> Result<(), DecodeError> {
        if self.contains(offset, width) {
            Ok(())
        } else {
            Err(DecodeError::Truncated {
                offset,
                width,
                len: self.data.len(),
            })
        }
    }

    pub fn bytes_at(&self, offset: usize, width: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(offset, width)?;
        Ok(&self.data[offset..offset + width])
    }

    pub fn read_u16_at(&self, offset: usize) -> Result<u16, DecodeError> {
        Ok(LE::read_u16(self.bytes_at(offset, 2)?))
    }

    pub fn read_u32_at(&self, offset: usize) -> Result<u32, DecodeError> {
        Ok(LE::read_u32(self.bytes_at(offset, 4)?))
    }

    pub fn read_i32_at(&self, offset: usize) -> Result<i32, DecodeError> {
        Ok(LE::read_i32(self.bytes_at(offset, 4)?))
    }
}
