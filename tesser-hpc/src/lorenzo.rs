use tesser_core::{ByteReader, CodecError, Element, Predictor};
use tesser_grid::Cursor;

/// N-dimensional Lorenzo predictor.
///
/// Predicts the current element by inclusion-exclusion over the 2^N - 1
/// neighbors at unit offsets behind it: each neighbor reached by stepping
/// back along a nonempty subset `s` of the axes contributes with sign
/// `(-1)^(|s|+1)`. For N = 1 this is previous-value prediction, for N = 2
/// the parallelogram rule `f(i-1,j) + f(i,j-1) - f(i-1,j-1)`.
///
/// Neighbors outside the array (at global edges) read as zero through the
/// cursor's look-back policy, which is exactly the identity this sum needs.
/// Stateless, so nothing is serialized.
#[derive(Debug, Default, Clone, Copy)]
pub struct LorenzoPredictor;

impl LorenzoPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Element, const N: usize> Predictor<T, N> for LorenzoPredictor {
    fn predict(&self, data: &[T], cursor: &Cursor<'_, N>) -> T {
        let mut predicted = T::zero();
        for subset in 1usize..(1 << N) {
            let mut back = [0usize; N];
            for axis in 0..N {
                back[axis] = (subset >> axis) & 1;
            }
            let neighbor = cursor.peek_back(data, back);
            if subset.count_ones() % 2 == 1 {
                predicted = predicted + neighbor;
            } else {
                predicted = predicted - neighbor;
            }
        }
        predicted
    }

    fn save(&self, _sink: &mut Vec<u8>) {}

    fn load(&mut self, _reader: &mut ByteReader<'_>) -> Result<(), CodecError> {
        Ok(())
    }
}
