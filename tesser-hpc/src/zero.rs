use tesser_core::{ByteReader, CodecError, Element, Predictor};
use tesser_grid::Cursor;

/// Predictor that always predicts zero.
///
/// Turns the pipeline into plain value quantization; useful as a baseline
/// and for fields with no spatial correlation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroPredictor;

impl ZeroPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Element, const N: usize> Predictor<T, N> for ZeroPredictor {
    fn predict(&self, _data: &[T], _cursor: &Cursor<'_, N>) -> T {
        T::zero()
    }

    fn save(&self, _sink: &mut Vec<u8>) {}

    fn load(&mut self, _reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        Ok(())
    }
}
