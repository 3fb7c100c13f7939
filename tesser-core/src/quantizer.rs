use crate::bytes::ByteReader;
use crate::element::Element;
use crate::error::CodecError;

/// Quantizer interface mapping prediction residuals to signed indices under
/// an absolute error bound.
///
/// The driver hands the caller's error bound to `precompress_data` at the
/// start of every compression; the quantizer derives its step from it and
/// serializes whatever it actually used, so decompression needs no bound
/// from the caller.
pub trait Quantizer<T: Element> {
    /// Called once before compression with the target absolute error bound.
    fn precompress_data(&mut self, eb: f64);

    fn postcompress_data(&mut self) {}

    fn precompress_block(&mut self) {}

    fn postcompress_block(&mut self) {}

    fn predecompress_data(&mut self) {}

    fn postdecompress_data(&mut self) {}

    fn predecompress_block(&mut self) {}

    fn postdecompress_block(&mut self) {}

    /// Quantize `value` against `predicted`, returning the signed index,
    /// and overwrite `value` with its reconstruction. The overwrite is
    /// load-bearing: later predictions must see what the decoder will see.
    fn quantize_and_overwrite(&mut self, value: &mut T, predicted: T) -> i32;

    /// Decoder-side inverse: reconstruct from prediction and index such
    /// that `recover(p, quantize_and_overwrite(v, p))` equals the value the
    /// encoder wrote back.
    fn recover(&mut self, predicted: T, index: i32) -> T;

    /// Nominal half-width of the index range. The driver sizes the encoder
    /// alphabet at four times this to leave headroom for escape indices.
    fn radius(&self) -> i32;

    fn save(&self, sink: &mut Vec<u8>);

    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError>;
}
