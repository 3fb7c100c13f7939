//! # tesser
//!
//! Block-structured, error-bounded lossy compression for dense N-dimensional
//! scientific fields, built as a predict-quantize-entropy-code pipeline over
//! a tiled row-major traversal.
//!
//! This umbrella crate re-exports the framework pieces:
//! - `tesser-grid`: N-D range/cursor traversal engine
//! - `tesser-core`: component contracts and the [`FieldCompressor`] driver
//! - `tesser-hpc`: concrete predictors, quantizers, and entropy coders
//!
//! ## Example
//!
//! ```
//! use tesser::{ErrorBoundedQuantizer, FieldCompressor, HuffmanEncoder, LorenzoPredictor};
//!
//! let field: Vec<f64> = (0..64 * 64)
//!     .map(|v| ((v / 64) as f64 / 8.0).sin() + ((v % 64) as f64 / 8.0).cos())
//!     .collect();
//!
//! let mut compressor = FieldCompressor::new(
//!     LorenzoPredictor::new(),
//!     ErrorBoundedQuantizer::<f64>::new(),
//!     HuffmanEncoder::new(),
//!     [64, 64],
//!     0, // default block size for 2-D
//! );
//! let compressed = compressor.compress(&field, 1e-3).unwrap();
//! let restored = compressor.decompress(&compressed).unwrap();
//! assert!(field
//!     .iter()
//!     .zip(&restored)
//!     .all(|(a, b)| (a - b).abs() <= 1e-3));
//! ```

pub use tesser_core::{
    ByteReader, CodecError, Element, Encoder, FieldCompressor, Predictor, Quantizer,
};
pub use tesser_grid::{default_block_size, Cursor, GridError, Range};
pub use tesser_hpc::{
    ErrorBoundedQuantizer, HuffmanEncoder, LorenzoPredictor, PlainEncoder, UniformQuantizer,
    ZeroPredictor,
};
