use std::collections::HashMap;

use super::evaluator::SequenceModel;
use super::record::ProbabilityRecord;

/// Represents a unigram model over whitespace-delimited tokens.
///
/// The `UnigramModel` counts how many times each distinct token occurs in
/// the training text and estimates per-token probabilities from those
/// counts.
///
/// # Responsibilities
/// - Accumulate token occurrence counts from a single training pass
/// - Estimate the probability of a known token
/// - Produce printable probability records for every known token
///
/// # Invariants
/// - Every stored count is >= 1
/// - A token absent from the model has implicit count 0 and is treated
///   as zero probability during evaluation
///
/// # Notes
/// Probabilities divide by the number of *distinct* tokens, not the total
/// number of occurrences. This mirrors the behavior of the program whose
/// output files this crate reproduces; see DESIGN.md.
#[derive(Clone, Debug, Default)]
pub struct UnigramModel {
	/// Occurrence count per distinct token.
	counts: HashMap<String, usize>,
	/// Tokens in first-observation order, for deterministic record output.
	order: Vec<String>,
}

impl UnigramModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a model from a normalized (lowercased, whitespace-collapsed)
	/// training text in a single pass.
	pub fn train(text: &str) -> Self {
		let mut model = Self::new();
		for token in text.split_whitespace() {
			model.record(token);
		}
		model
	}

	/// Records one occurrence of `token`, inserting it with count 1 if absent.
	pub fn record(&mut self, token: &str) {
		if !self.counts.contains_key(token) {
			self.order.push(token.to_owned());
		}
		*self.counts.entry(token.to_owned()).or_insert(0) += 1;
	}

	/// Returns true if `token` occurred in the training text.
	pub fn contains(&self, token: &str) -> bool {
		self.counts.contains_key(token)
	}

	/// Number of occurrences of `token`, 0 if it was never seen.
	pub fn count(&self, token: &str) -> usize {
		self.counts.get(token).copied().unwrap_or(0)
	}

	/// Number of distinct tokens in the model.
	pub fn vocabulary_size(&self) -> usize {
		self.counts.len()
	}

	/// Probability of a known token: its count divided by the number of
	/// distinct tokens.
	///
	/// Returns `None` for a token that never occurred; callers check
	/// `contains` first and substitute 0.0 themselves.
	pub fn probability(&self, token: &str) -> Option<f64> {
		let count = *self.counts.get(token)?;
		Some(count as f64 / self.counts.len() as f64)
	}

	/// Produces one probability record per known token, in
	/// first-observation order.
	pub fn probability_records(&self) -> Vec<ProbabilityRecord> {
		self.order
			.iter()
			.filter_map(|token| {
				self.probability(token)
					.map(|p| ProbabilityRecord::unigram(token, p))
			})
			.collect()
	}
}

impl SequenceModel for UnigramModel {
	/// Joint probability of a line: the product of per-token probabilities.
	///
	/// A single token absent from the model annihilates the whole line, so
	/// evaluation short-circuits to 0.0 at the first unknown token.
	fn line_probability(&self, line: &str) -> f64 {
		let mut joint = 1.0;
		for token in line.split_whitespace() {
			match self.probability(token) {
				Some(p) => joint *= p,
				None => return 0.0,
			}
		}
		joint
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TRAINING: &str = "the cat sat on the mat";

	#[test]
	fn counts_sum_to_total_token_occurrences() {
		let model = UnigramModel::train(TRAINING);
		let summed: usize = model
			.probability_records()
			.iter()
			.map(|record| model.count(&record.token))
			.sum();
		assert_eq!(summed, TRAINING.split_whitespace().count());
	}

	#[test]
	fn probability_divides_by_distinct_token_count() {
		let model = UnigramModel::train(TRAINING);
		assert_eq!(model.vocabulary_size(), 5);
		assert_eq!(model.probability("the"), Some(0.4));
		assert_eq!(model.probability("cat"), Some(0.2));
	}

	#[test]
	fn absent_token_has_no_probability() {
		let model = UnigramModel::train(TRAINING);
		assert!(!model.contains("dog"));
		assert_eq!(model.probability("dog"), None);
		assert_eq!(model.count("dog"), 0);
	}

	#[test]
	fn training_twice_yields_identical_counts() {
		let first = UnigramModel::train(TRAINING);
		let second = UnigramModel::train(TRAINING);
		for token in TRAINING.split_whitespace() {
			assert_eq!(first.count(token), second.count(token));
		}
		assert_eq!(first.vocabulary_size(), second.vocabulary_size());
	}

	#[test]
	fn records_cover_every_distinct_token_in_first_observation_order() {
		let model = UnigramModel::train(TRAINING);
		let records = model.probability_records();
		let tokens: Vec<_> = records.iter().map(|r| r.token.as_str()).collect();
		assert_eq!(tokens, vec!["the", "cat", "sat", "on", "mat"]);
		assert!(records.iter().all(|r| r.predecessor.is_none()));
	}

	#[test]
	fn line_probability_multiplies_token_probabilities() {
		let model = UnigramModel::train(TRAINING);
		// 0.4 * 0.2
		let joint = model.line_probability("the cat");
		assert!((joint - 0.08).abs() < 1e-12);
	}

	#[test]
	fn line_with_unknown_token_has_zero_probability() {
		let model = UnigramModel::train(TRAINING);
		assert_eq!(model.line_probability("the dog"), 0.0);
	}
}
