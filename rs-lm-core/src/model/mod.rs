//! Top-level module for the statistical language models.
//!
//! This module provides the two word-level models and their shared
//! evaluation machinery, including:
//! - A unigram token counter (`UnigramModel`)
//! - A bigram transition graph (`BigramModel`)
//! - Internal per-token transition nodes (`Node`)
//! - Printable probability records and random sampling (`record`)
//! - Joint-probability and perplexity evaluation (`evaluator`)

/// Unigram model: occurrence counts per distinct token and the
/// per-token probability estimate derived from them.
pub mod unigram;

/// Bigram model: a graph of per-token nodes recording observed
/// successions, bounded by `<START>` / `<END>` sentinels.
pub mod bigram;

/// Internal representation of a single transition node.
///
/// Tracks (successor, count) pairs in first-observation order.
/// This module is not exposed publicly; the type is re-exported below.
mod node;

/// Printable probability records and uniform sampling without
/// replacement for output selection.
pub mod record;

/// Line-oriented evaluation: the shared `SequenceModel` contract,
/// joint probabilities and perplexity scores.
pub mod evaluator;

pub use node::Node;
