use thiserror::Error;

/// Errors that abort a run.
///
/// Model-level conditions (a token missing from the vocabulary, an
/// undefined perplexity) are ordinary data, not errors: they surface as a
/// 0.0 joint probability and [`Perplexity::Undefined`] respectively and
/// evaluation carries on. Only I/O failures, unusable configuration and
/// missing evaluation data stop the run.
///
/// [`Perplexity::Undefined`]: crate::model::evaluator::Perplexity
#[derive(Debug, Error)]
pub enum LmError {
	/// Unreadable input file or unwritable output path. Propagated to the
	/// caller; the core never retries.
	#[error("i/o failure: {0}")]
	Io(#[from] std::io::Error),

	/// The configuration file could not be parsed.
	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),

	/// Fewer non-blank evaluation lines than the run asked to score.
	#[error("insufficient evaluation data: {available} non-blank lines available, {required} required")]
	InsufficientEvaluationData { available: usize, required: usize },
}
