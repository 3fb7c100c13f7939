//! # tesser-hpc
//!
//! Concrete pipeline components for scientific field compression with strict
//! error bounds.
//!
//! Key types:
//! - [`LorenzoPredictor`]: N-dimensional Lorenzo prediction from the 2^N - 1
//!   already-reconstructed unit-offset neighbors
//! - [`ZeroPredictor`]: always predicts zero (plain value quantization)
//! - [`ErrorBoundedQuantizer`]: strict ε-guarantee with a lossless escape
//!   list for unpredictable samples
//! - [`UniformQuantizer`]: step-`2ε` quantization without escape handling
//! - [`HuffmanEncoder`]: canonical Huffman coding of the index stream
//! - [`PlainEncoder`]: verbatim index stream (baseline / debugging)

pub mod bits;
pub mod error_bounded;
pub mod huffman;
pub mod lorenzo;
pub mod plain;
pub mod uniform;
pub mod zero;

pub use error_bounded::ErrorBoundedQuantizer;
pub use huffman::HuffmanEncoder;
pub use lorenzo::LorenzoPredictor;
pub use plain::PlainEncoder;
pub use uniform::UniformQuantizer;
pub use zero::ZeroPredictor;
