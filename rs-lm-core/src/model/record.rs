use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// A single printable probability estimate produced by a trained model.
///
/// Unigram records carry no predecessor and render as `P(token) = <p>`;
/// bigram records carry the predecessor and render as
/// `P(successor|predecessor) = <p>`.
///
/// ## Invariants
/// - `probability` is in (0.0, 1.0]: records are only emitted for
///   observed tokens/transitions, which always have a count >= 1
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityRecord {
	/// Conditioning token, `None` for the unigram model.
	pub predecessor: Option<String>,
	/// The token whose probability is estimated.
	pub token: String,
	/// The estimated probability.
	pub probability: f64,
}

impl ProbabilityRecord {
	/// Creates an unconditional (unigram) record.
	pub fn unigram(token: &str, probability: f64) -> Self {
		Self {
			predecessor: None,
			token: token.to_owned(),
			probability,
		}
	}

	/// Creates a conditional (bigram) record for `successor` given `predecessor`.
	pub fn bigram(predecessor: &str, successor: &str, probability: f64) -> Self {
		Self {
			predecessor: Some(predecessor.to_owned()),
			token: successor.to_owned(),
			probability,
		}
	}
}

impl fmt::Display for ProbabilityRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.predecessor {
			Some(predecessor) => {
				write!(f, "P({}|{}) = {}", self.token, predecessor, self.probability)
			}
			None => write!(f, "P({}) = {}", self.token, self.probability),
		}
	}
}

/// Selects at most `limit` records by uniform random sampling without
/// replacement.
///
/// The full record list is shuffled with the caller-provided generator and
/// truncated. When fewer than `limit` records exist, all of them are
/// returned (shuffled).
///
/// # Notes
/// - The RNG is injected so callers can seed it for reproducible output.
/// - Each input record appears at most once in the result.
pub fn sample_records(
	mut records: Vec<ProbabilityRecord>,
	limit: usize,
	rng: &mut impl Rng,
) -> Vec<ProbabilityRecord> {
	records.shuffle(rng);
	records.truncate(limit);
	records
}
