use thiserror::Error;

use crate::cursor::Cursor;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Axis {0} has zero extent")]
    EmptyAxis(usize),
    #[error("Access stride must be nonzero")]
    ZeroStride,
}

/// A logical view over a row-major N-D array.
///
/// A range records the global shape of the array, the number of grid
/// positions it visits along each axis at its access stride, and the element
/// distance between consecutive positions. It never touches the array
/// itself: cursors produced by [`Range::begin`] yield linear offsets into a
/// slice the caller provides.
///
/// Invariant, restored after every mutation:
/// `end_offset = start_offset + dimensions[0] * dim_strides[0]`.
#[derive(Debug, Clone)]
pub struct Range<const N: usize> {
    global_dims: [usize; N],
    global_dim_strides: [usize; N],
    /// Number of visited positions along each axis.
    dimensions: [usize; N],
    /// Element distance between consecutive visited positions per axis.
    dim_strides: [usize; N],
    /// Whether this range starts at the global origin on each axis.
    /// Block-local predictors use this to treat array edges specially.
    start_position: [bool; N],
    access_stride: usize,
    start_offset: usize,
    end_offset: usize,
}

impl<const N: usize> Range<N> {
    /// Build a range over an array of shape `global_dims`, visiting every
    /// `access_stride`-th position along each axis, starting at linear
    /// offset `start_offset`.
    pub fn new(
        global_dims: [usize; N],
        access_stride: usize,
        start_offset: usize,
    ) -> Result<Self, GridError> {
        if access_stride == 0 {
            return Err(GridError::ZeroStride);
        }
        if let Some(axis) = global_dims.iter().position(|&d| d == 0) {
            return Err(GridError::EmptyAxis(axis));
        }

        let mut global_dim_strides = [0usize; N];
        let mut stride = access_stride;
        for i in (0..N).rev() {
            global_dim_strides[i] = stride;
            stride *= global_dims[i];
        }

        let mut dimensions = [0usize; N];
        for i in 0..N {
            dimensions[i] = (global_dims[i] - 1) / access_stride + 1;
        }

        let mut range = Self {
            global_dims,
            global_dim_strides,
            dimensions,
            // Identical to the global strides until dimensions are reshaped;
            // kept separate because reshaping narrows dimensions only.
            dim_strides: global_dim_strides,
            start_position: [false; N],
            access_stride,
            start_offset: 0,
            end_offset: 0,
        };
        range.set_offsets(start_offset);
        Ok(range)
    }

    /// Overwrite the per-axis visit counts. Used to narrow an element-level
    /// range to the truncated extents of a boundary block.
    pub fn set_dimensions(&mut self, dims: [usize; N]) {
        self.dimensions = dims;
        self.end_offset = self.start_offset + self.dimensions[0] * self.dim_strides[0];
    }

    /// Re-seat the range at a new linear start offset.
    pub fn set_offsets(&mut self, offset: usize) {
        self.start_offset = offset;
        self.end_offset = offset + self.dimensions[0] * self.dim_strides[0];
    }

    /// Record, from a block's grid index, which axes of this range begin at
    /// the global origin.
    pub fn set_starting_position(&mut self, block_index: [usize; N]) {
        for i in 0..N {
            self.start_position[i] = block_index[i] == 0;
        }
    }

    /// Cursor at the first position of the range.
    pub fn begin(&self) -> Cursor<'_, N> {
        Cursor::new(self, self.start_offset)
    }

    pub fn dimension(&self, axis: usize) -> usize {
        self.dimensions[axis]
    }

    pub fn dimensions(&self) -> [usize; N] {
        self.dimensions
    }

    /// Total number of positions this range visits.
    pub fn num_positions(&self) -> usize {
        self.dimensions.iter().product()
    }

    pub fn global_dims(&self) -> [usize; N] {
        self.global_dims
    }

    pub fn starts_at_origin(&self, axis: usize) -> bool {
        self.start_position[axis]
    }

    pub fn access_stride(&self) -> usize {
        self.access_stride
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Sentinel offset one whole axis-0 span past the start.
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    pub(crate) fn dim_stride(&self, axis: usize) -> usize {
        self.dim_strides[axis]
    }

    pub(crate) fn global_dim_stride(&self, axis: usize) -> usize {
        self.global_dim_strides[axis]
    }
}
