//! # tesser-grid
//!
//! N-dimensional traversal engine for the Tesser compression framework.
//!
//! This crate provides [`Range`], a pure-geometry view describing how to walk
//! a sub-region of a row-major N-D array, and [`Cursor`], a bidirectional
//! odometer over that view. A range owns no data: element access goes through
//! slices supplied by the caller, so the driver keeps exclusive ownership of
//! its buffers while any number of cursors borrow the geometry.
//!
//! The same machinery serves both traversal levels of a tiled compressor:
//! an access stride of `B` walks the block grid, an access stride of 1 walks
//! the elements inside one block.
//!
//! **Zero external dependencies** (besides `thiserror` for error types).

pub mod cursor;
pub mod range;

pub use cursor::Cursor;
pub use range::{GridError, Range};

/// Default block edge length for a given dimensionality: 128 for 1-D,
/// 16 for 2-D, 6 for 3-D and above.
pub fn default_block_size(num_dims: usize) -> usize {
    match num_dims {
        1 => 128,
        2 => 16,
        _ => 6,
    }
}
