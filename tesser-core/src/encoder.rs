use crate::bytes::ByteReader;
use crate::error::CodecError;

/// Entropy coder interface for the quantization index stream.
pub trait Encoder {
    /// Build frequency/code tables for `indices`. `alphabet_size` is an
    /// upper bound on the number of distinct symbols, used for sizing.
    fn preprocess_encode(&mut self, indices: &[i32], alphabet_size: usize);

    /// Append the code tables to the compressed buffer.
    fn save(&self, sink: &mut Vec<u8>);

    /// Restore code tables from a prefix of the remaining buffer.
    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError>;

    /// Append the encoded bitstream for `indices`.
    fn encode(&mut self, indices: &[i32], sink: &mut Vec<u8>);

    /// Decode exactly `count` indices from the remaining buffer.
    fn decode(&mut self, reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<i32>, CodecError>;

    /// Release per-run encode state.
    fn postprocess_encode(&mut self) {}

    /// Release per-run decode state.
    fn postprocess_decode(&mut self) {}
}
