use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Input has {actual} elements but the shape implies {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Compressed buffer ended early: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow { needed: usize, remaining: usize },
    #[error("Corrupt compressed stream: {0}")]
    CorruptStream(&'static str),
    #[error("Grid error: {0}")]
    Grid(#[from] tesser_grid::GridError),
}
