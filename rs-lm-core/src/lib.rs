//! Word-level statistical language modeling library.
//!
//! This crate builds simple statistical language models from a training
//! text and scores held-out text against them:
//! - Unigram and bigram models over whitespace-delimited, lowercased tokens
//! - Probability estimation from raw occurrence counts (no smoothing)
//! - Per-line joint probability and perplexity evaluation
//! - A batch pipeline writing sampled probability records and per-line
//!   perplexities to line-oriented text files
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core models and evaluation logic.
pub mod model;

/// Run parameters (file names, line limit, sampling seed).
pub mod config;

/// Error taxonomy for a run.
pub mod error;

/// End-to-end batch pipeline: train, sample, evaluate, write.
pub mod pipeline;

/// I/O utilities (corpus loading and normalization, line-oriented output).
///
/// Not exposed
pub(crate) mod io;
