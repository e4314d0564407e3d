use std::fmt;

use crate::error::LmError;

/// Shared contract of the unigram and bigram models: scoring a line of
/// held-out text.
///
/// Both models assign a whitespace-tokenized line the product of their
/// per-token (unigram) or per-transition (bigram) probability estimates.
/// A token or transition never seen during training makes the whole line
/// impossible, so implementations return exactly 0.0 in that case rather
/// than failing.
pub trait SequenceModel {
	/// Joint probability of `line` under the model.
	fn line_probability(&self, line: &str) -> f64;
}

/// Perplexity of one evaluated line.
///
/// A joint probability of 0.0 makes the perplexity formula mathematically
/// undefined (a fractional power of zero in the denominator), so that case
/// is carried as an explicit variant instead of a platform-specific
/// floating-point artifact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Perplexity {
	/// `1 / joint^(1/line_length)` for a strictly positive joint probability.
	Defined(f64),
	/// The line contained a token or transition unseen in training.
	Undefined,
}

impl Perplexity {
	/// Converts a joint probability into a perplexity score.
	///
	/// `line_length` is the number of whitespace-delimited tokens in the
	/// line, sentinels not counted. A zero joint probability yields
	/// [`Perplexity::Undefined`].
	pub fn from_joint(line_length: usize, joint_probability: f64) -> Self {
		if joint_probability == 0.0 || line_length == 0 {
			return Self::Undefined;
		}
		Self::Defined(1.0 / joint_probability.powf(1.0 / line_length as f64))
	}
}

impl fmt::Display for Perplexity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Defined(value) => write!(f, "{}", value),
			Self::Undefined => write!(f, "undefined"),
		}
	}
}

/// Scores the first `number_of_lines` non-blank lines of `text` under `model`.
///
/// The evaluation text keeps its original line structure: it is split on
/// line boundaries, each line is trimmed and blank lines are discarded.
/// Perplexities are returned in the order the lines were encountered.
///
/// # Errors
/// Returns [`LmError::InsufficientEvaluationData`] when fewer than
/// `number_of_lines` non-blank lines are available.
pub fn evaluate_lines(
	model: &impl SequenceModel,
	text: &str,
	number_of_lines: usize,
) -> Result<Vec<Perplexity>, LmError> {
	let lines: Vec<&str> = text
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect();

	if lines.len() < number_of_lines {
		return Err(LmError::InsufficientEvaluationData {
			available: lines.len(),
			required: number_of_lines,
		});
	}

	Ok(lines[..number_of_lines]
		.iter()
		.map(|line| {
			let joint = model.line_probability(line);
			Perplexity::from_joint(line.split_whitespace().count(), joint)
		})
		.collect())
}
