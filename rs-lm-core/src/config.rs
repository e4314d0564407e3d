use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LmError;

/// Parameters of one run: input/output file names, the record/line limit
/// and an optional sampling seed.
///
/// Defaults mirror the historical constants of this tool (a Conan Doyle
/// corpus and 100 output lines). A JSON file may override any subset of
/// fields:
///
/// ```json
/// { "training_file": "corpus.txt", "number_of_lines": 50, "seed": 7 }
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
	/// Training corpus, normalized before tokenization.
	pub training_file: PathBuf,
	/// Held-out text scored line by line.
	pub evaluation_file: PathBuf,
	/// Output file for sampled unigram probability records.
	pub unigram_probabilities_file: PathBuf,
	/// Output file for unigram per-line perplexities.
	pub unigram_evaluation_file: PathBuf,
	/// Output file for sampled bigram probability records.
	pub bigram_probabilities_file: PathBuf,
	/// Output file for bigram per-line perplexities.
	pub bigram_evaluation_file: PathBuf,
	/// Number of probability records sampled and evaluation lines scored.
	pub number_of_lines: usize,
	/// Seed for the record-sampling shuffle; a random seed is drawn when
	/// absent.
	pub seed: Option<u64>,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			training_file: PathBuf::from("doyle-27.txt"),
			evaluation_file: PathBuf::from("doyle-case-27.txt"),
			unigram_probabilities_file: PathBuf::from("unigram_probs.txt"),
			unigram_evaluation_file: PathBuf::from("unigram_eval.txt"),
			bigram_probabilities_file: PathBuf::from("bigram_probs.txt"),
			bigram_evaluation_file: PathBuf::from("bigram_eval.txt"),
			number_of_lines: 100,
			seed: None,
		}
	}
}

impl RunConfig {
	/// Loads a configuration from a JSON file.
	///
	/// # Errors
	/// - [`LmError::Io`] if the file cannot be read
	/// - [`LmError::Config`] if it is not valid JSON or names unknown fields
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LmError> {
		let contents = fs::read_to_string(path)?;
		Ok(serde_json::from_str(&contents)?)
	}
}
