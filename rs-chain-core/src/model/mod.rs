//! Top-level module for the chain generation system.
//!
//! This module provides:
//! - Tokens and per-state successor lists (`Token`, `State`)
//! - N-gram segmentation (`Mode`, `ngrams`)
//! - The transition table and its walks (`ChainModel`)
//! - Generation configuration (`GenerationInput`)
//! - A seeded generation driver with novelty labels (`Generator`)

/// Transition table keys and their ordered successor lists.
pub mod token;

/// Splits a line into overlapping character or word n-grams.
pub mod segmenter;

/// Transition table built from digested lines.
///
/// Handles digestion, single-step transitions, character and word walks,
/// and the verbatim corpus lookup.
pub mod chain_model;

/// Validated generation settings.
pub mod generation_input;

/// High-level interface owning a model and a once-seeded random source.
pub mod generator;
