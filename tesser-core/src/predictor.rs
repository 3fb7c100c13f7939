use tesser_grid::{Cursor, Range};

use crate::bytes::ByteReader;
use crate::element::Element;
use crate::error::CodecError;

/// Predictor interface for spatial predictive compression.
///
/// `predict` may only read data that the traversal has already visited, i.e.
/// values that have been overwritten with their reconstructions, and must
/// reach neighbors exclusively through [`Cursor::peek_back`]. This keeps the
/// encoder's and decoder's predictions bit-identical.
///
/// The bracketing hooks default to no-ops; stateful predictors override the
/// ones they need. `save`/`load` round-trip whatever state the decoder
/// requires through the compressed buffer.
pub trait Predictor<T: Element, const N: usize> {
    /// Called once before the whole-array compression walk.
    fn precompress_data(&mut self, _data: &[T], _start: &Cursor<'_, N>) {}

    /// Called once after the whole-array compression walk.
    fn postcompress_data(&mut self, _data: &[T]) {}

    /// Called before each block, with the element-level range re-seated to
    /// that block's extents.
    fn precompress_block(&mut self, _block: &Range<N>) {}

    fn postcompress_block(&mut self, _block: &Range<N>) {}

    fn predecompress_data(&mut self, _data: &[T], _start: &Cursor<'_, N>) {}

    fn postdecompress_data(&mut self, _data: &[T]) {}

    fn predecompress_block(&mut self, _block: &Range<N>) {}

    fn postdecompress_block(&mut self, _block: &Range<N>) {}

    /// Predicted value for the element under `cursor`.
    fn predict(&self, data: &[T], cursor: &Cursor<'_, N>) -> T;

    /// Append serialized state to the compressed buffer.
    fn save(&self, sink: &mut Vec<u8>);

    /// Restore state from a prefix of the remaining compressed buffer.
    fn load(&mut self, reader: &mut ByteReader<'_>) -> Result<(), CodecError>;
}
