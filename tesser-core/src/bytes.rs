use byteorder::{ByteOrder, LittleEndian};

use crate::error::CodecError;

/// Bounded read cursor over a compressed buffer.
///
/// Every read checks the remaining length first and surfaces
/// [`CodecError::BufferUnderflow`] instead of panicking; a field that
/// consumes the buffer exactly is valid. All multi-byte fields are
/// little-endian, which fixes the on-wire byte order independent of host.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::BufferUnderflow {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32, CodecError> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64, CodecError> {
        Ok(LittleEndian::read_f64(self.read_bytes(8)?))
    }
}
