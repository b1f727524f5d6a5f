//! N-gram Markov chain text generation library.
//!
//! This crate provides a small chain model built from a line-oriented corpus:
//! - Character-level or word-level n-gram segmentation
//! - Digestion of lines into an ordered transition table
//! - Uniform random walks from the start marker to the end marker
//! - Novelty labelling of generated sequences against the corpus
//!
//! The high-level entry point is [`model::generator::Generator`].

/// Chain model, segmentation and generation logic.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Line ingestion and tabular emission helpers.
pub mod io;

pub use error::ChainError;
