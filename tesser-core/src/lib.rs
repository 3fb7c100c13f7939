//! # tesser-core
//!
//! Component contracts and compression drivers for Tesser's block-structured,
//! error-bounded lossy compression of dense N-D numeric arrays.
//!
//! This crate defines the three fundamental traits the pipeline is built on:
//! - [`Predictor`]: estimate the current element from already-reconstructed
//!   neighbors reached through cursor look-back
//! - [`Quantizer`]: map (value, prediction) to a signed index under an
//!   absolute error bound, overwriting the value with its reconstruction
//! - [`Encoder`]: entropy-code the bounded-alphabet index stream
//!
//! [`FieldCompressor`] drives the three over a two-level tiled traversal
//! (block grid, then elements within each block) and serializes everything
//! into a single self-describing little-endian buffer.

pub mod bytes;
pub mod compressor;
pub mod element;
pub mod encoder;
pub mod error;
pub mod predictor;
pub mod quantizer;

pub use bytes::ByteReader;
pub use compressor::FieldCompressor;
pub use element::Element;
pub use encoder::Encoder;
pub use error::CodecError;
pub use predictor::Predictor;
pub use quantizer::Quantizer;
