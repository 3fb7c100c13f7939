use num_traits::Float;

use crate::bytes::ByteReader;
use crate::error::CodecError;

/// Scalar element type a field can be made of.
///
/// Extends [`Float`] with an exact little-endian wire encoding and a bridge
/// to `f64`, in which all error-bound arithmetic is carried out.
pub trait Element: Float + Default + 'static {
    /// Encoded size in bytes.
    const WIRE_SIZE: usize;

    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;

    fn write_le(self, sink: &mut Vec<u8>);
    fn read_le(reader: &mut ByteReader<'_>) -> Result<Self, CodecError>;
}

impl Element for f32 {
    const WIRE_SIZE: usize = 4;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn write_le(self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        reader.read_f32()
    }
}

impl Element for f64 {
    const WIRE_SIZE: usize = 8;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn write_le(self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        reader.read_f64()
    }
}
