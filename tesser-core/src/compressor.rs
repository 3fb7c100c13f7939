use std::marker::PhantomData;

use tesser_grid::{default_block_size, Cursor, Range};

use crate::bytes::ByteReader;
use crate::element::Element;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::predictor::Predictor;
use crate::quantizer::Quantizer;

/// Block-structured predict-quantize-encode compressor for a dense N-D
/// array.
///
/// The constructor binds the element type, dimensionality, block size, and
/// the three pipeline components; dispatch in the per-element loop is fully
/// monomorphized. A `block_size` of 0 selects the per-dimensionality default
/// (128 / 16 / 6 for N = 1 / 2 / >= 3).
///
/// Compressed buffer layout (all fields little-endian):
///
/// | field                | size        |
/// |----------------------|-------------|
/// | global shape         | `N * 8`     |
/// | block size           | 4           |
/// | predictor state      | variable    |
/// | quantizer state      | variable    |
/// | encoder tables       | variable    |
/// | encoded index stream | variable    |
///
/// Each variable-length section is self-describing; no separate lengths are
/// recorded.
pub struct FieldCompressor<T, const N: usize, P, Q, E> {
    predictor: P,
    quantizer: Q,
    encoder: E,
    block_size: usize,
    global_dims: [usize; N],
    num_elements: usize,
    _element: PhantomData<T>,
}

impl<T, const N: usize, P, Q, E> FieldCompressor<T, N, P, Q, E>
where
    T: Element,
    P: Predictor<T, N>,
    Q: Quantizer<T>,
    E: Encoder,
{
    pub fn new(
        predictor: P,
        quantizer: Q,
        encoder: E,
        global_dims: [usize; N],
        block_size: usize,
    ) -> Self {
        let block_size = if block_size == 0 {
            default_block_size(N)
        } else {
            block_size
        };
        Self {
            predictor,
            quantizer,
            encoder,
            block_size,
            global_dims,
            num_elements: global_dims.iter().product(),
            _element: PhantomData,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn global_dims(&self) -> [usize; N] {
        self.global_dims
    }

    /// Per-axis extent of the element walk inside the block under
    /// `block_cursor`: the full block edge, truncated on last-index blocks
    /// to what remains of the array.
    fn block_extents(&self, inter: &Range<N>, block_cursor: &Cursor<'_, N>) -> [usize; N] {
        let mut extents = [0usize; N];
        for axis in 0..N {
            let idx = block_cursor.index_at(axis);
            extents[axis] = if idx == inter.dimension(axis) - 1 {
                self.global_dims[axis] - idx * self.block_size
            } else {
                self.block_size
            };
        }
        extents
    }

    /// Compress `input` under the absolute error bound `eb`.
    ///
    /// Walks the block grid in row-major order and, inside each block, every
    /// element in row-major order. Each element is predicted from
    /// already-visited neighbors, quantized, and immediately overwritten
    /// with its reconstruction in the working copy so that every later
    /// prediction sees exactly what the decoder will reconstruct.
    pub fn compress(&mut self, input: &[T], eb: f64) -> Result<Vec<u8>, CodecError> {
        if input.len() != self.num_elements {
            return Err(CodecError::LengthMismatch {
                expected: self.num_elements,
                actual: input.len(),
            });
        }

        let mut work = input.to_vec();
        let inter = Range::new(self.global_dims, self.block_size, 0)?;
        let mut intra = Range::new(self.global_dims, 1, 0)?;
        let mut quant_inds: Vec<i32> = Vec::with_capacity(self.num_elements);

        self.predictor.precompress_data(&work, &inter.begin());
        self.quantizer.precompress_data(eb);

        let mut block = inter.begin();
        while !block.is_done() {
            intra.set_dimensions(self.block_extents(&inter, &block));
            intra.set_offsets(block.offset());
            intra.set_starting_position(block.index());

            self.predictor.precompress_block(&intra);
            self.quantizer.precompress_block();

            let mut elem = intra.begin();
            while !elem.is_done() {
                let predicted = self.predictor.predict(&work, &elem);
                let offset = elem.offset();
                quant_inds.push(
                    self.quantizer
                        .quantize_and_overwrite(&mut work[offset], predicted),
                );
                elem.advance();
            }

            self.predictor.postcompress_block(&intra);
            self.quantizer.postcompress_block();
            block.advance();
        }

        self.predictor.postcompress_data(&work);
        self.quantizer.postcompress_data();

        let mut out = Vec::with_capacity(2 * self.num_elements * T::WIRE_SIZE);
        for &d in &self.global_dims {
            out.extend_from_slice(&(d as u64).to_le_bytes());
        }
        out.extend_from_slice(&(self.block_size as u32).to_le_bytes());
        self.predictor.save(&mut out);
        self.quantizer.save(&mut out);
        self.encoder
            .preprocess_encode(&quant_inds, 4 * self.quantizer.radius() as usize);
        self.encoder.save(&mut out);
        self.encoder.encode(&quant_inds, &mut out);
        self.encoder.postprocess_encode();

        Ok(out)
    }

    /// Decompress a buffer produced by [`FieldCompressor::compress`].
    ///
    /// Replays the identical traversal, reconstructing each element from
    /// the prediction and the decoded index. The shape and block size in
    /// the header replace whatever the compressor was constructed with.
    pub fn decompress(&mut self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        let mut reader = ByteReader::new(bytes);

        for axis in 0..N {
            self.global_dims[axis] = reader.read_u64()? as usize;
        }
        self.num_elements = self.global_dims.iter().product();
        self.block_size = reader.read_u32()? as usize;

        self.predictor.load(&mut reader)?;
        self.quantizer.load(&mut reader)?;
        self.encoder.load(&mut reader)?;

        let quant_inds = self.encoder.decode(&mut reader, self.num_elements)?;
        self.encoder.postprocess_decode();
        if quant_inds.len() != self.num_elements {
            return Err(CodecError::CorruptStream(
                "decoded index count does not match the shape volume",
            ));
        }

        let mut data = vec![T::zero(); self.num_elements];
        let inter = Range::new(self.global_dims, self.block_size, 0)?;
        let mut intra = Range::new(self.global_dims, 1, 0)?;

        self.predictor.predecompress_data(&data, &inter.begin());
        self.quantizer.predecompress_data();

        let mut next = 0usize;
        let mut block = inter.begin();
        while !block.is_done() {
            intra.set_dimensions(self.block_extents(&inter, &block));
            intra.set_offsets(block.offset());
            intra.set_starting_position(block.index());

            self.predictor.predecompress_block(&intra);
            self.quantizer.predecompress_block();

            let mut elem = intra.begin();
            while !elem.is_done() {
                let predicted = self.predictor.predict(&data, &elem);
                let offset = elem.offset();
                data[offset] = self.quantizer.recover(predicted, quant_inds[next]);
                next += 1;
                elem.advance();
            }

            self.predictor.postdecompress_block(&intra);
            self.quantizer.postdecompress_block();
            block.advance();
        }

        self.predictor.postdecompress_data(&data);
        self.quantizer.postdecompress_data();

        Ok(data)
    }
}
