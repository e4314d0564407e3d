use log::{debug, info};
use rand::Rng;

use crate::config::RunConfig;
use crate::error::LmError;
use crate::io;
use crate::model::bigram::BigramModel;
use crate::model::evaluator::{SequenceModel, evaluate_lines};
use crate::model::record::{ProbabilityRecord, sample_records};
use crate::model::unigram::UnigramModel;

/// Runs the full batch pipeline for both models.
///
/// For each model: train on the normalized training text, sample
/// `number_of_lines` probability records and write them, then score the
/// first `number_of_lines` non-blank evaluation lines and write one
/// perplexity per line.
///
/// The two models never interact; they only share the input files. The
/// caller owns the random generator so sampled output is reproducible
/// under a fixed seed.
pub fn run(config: &RunConfig, rng: &mut impl Rng) -> Result<(), LmError> {
	info!("reading training text from {}", config.training_file.display());
	let training = io::read_training_text(&config.training_file)?;
	info!(
		"reading evaluation text from {}",
		config.evaluation_file.display()
	);
	let evaluation = io::read_evaluation_text(&config.evaluation_file)?;

	info!("training unigram model");
	let unigram = UnigramModel::train(&training);
	debug!("unigram vocabulary: {} distinct tokens", unigram.vocabulary_size());
	write_model_output(
		config,
		rng,
		&unigram,
		unigram.probability_records(),
		&evaluation,
		&config.unigram_probabilities_file,
		&config.unigram_evaluation_file,
	)?;

	info!("training bigram model");
	let bigram = BigramModel::train(&training);
	debug!("bigram graph: {} nodes", bigram.node_count());
	write_model_output(
		config,
		rng,
		&bigram,
		bigram.probability_records(),
		&evaluation,
		&config.bigram_probabilities_file,
		&config.bigram_evaluation_file,
	)?;

	info!("run complete");
	Ok(())
}

/// Samples and writes probability records, then evaluates and writes
/// per-line perplexities, for one fitted model.
fn write_model_output(
	config: &RunConfig,
	rng: &mut impl Rng,
	model: &impl SequenceModel,
	records: Vec<ProbabilityRecord>,
	evaluation: &str,
	probabilities_file: &std::path::Path,
	evaluation_file: &std::path::Path,
) -> Result<(), LmError> {
	debug!("{} probability records before sampling", records.len());
	let sampled = sample_records(records, config.number_of_lines, rng);
	io::write_lines(probabilities_file, &sampled)?;

	let perplexities = evaluate_lines(model, evaluation, config.number_of_lines)?;
	io::write_lines(evaluation_file, &perplexities)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::env;
	use std::fs;
	use std::path::PathBuf;

	fn scratch_path(tag: &str, name: &str) -> PathBuf {
		env::temp_dir().join(format!("rs-lm-pipeline-{}-{}-{}", std::process::id(), tag, name))
	}

	fn scratch_config(tag: &str) -> RunConfig {
		RunConfig {
			training_file: scratch_path(tag, "train.txt"),
			evaluation_file: scratch_path(tag, "eval.txt"),
			unigram_probabilities_file: scratch_path(tag, "unigram_probs.txt"),
			unigram_evaluation_file: scratch_path(tag, "unigram_eval.txt"),
			bigram_probabilities_file: scratch_path(tag, "bigram_probs.txt"),
			bigram_evaluation_file: scratch_path(tag, "bigram_eval.txt"),
			number_of_lines: 2,
			seed: Some(1),
		}
	}

	fn cleanup(config: &RunConfig) {
		for path in [
			&config.training_file,
			&config.evaluation_file,
			&config.unigram_probabilities_file,
			&config.unigram_evaluation_file,
			&config.bigram_probabilities_file,
			&config.bigram_evaluation_file,
		] {
			let _ = fs::remove_file(path);
		}
	}

	#[test]
	fn full_run_writes_all_four_output_files() {
		let config = scratch_config("full");
		fs::write(&config.training_file, "The cat sat on the mat\n").unwrap();
		fs::write(&config.evaluation_file, "the cat\n\nthe unknown word\n").unwrap();

		let mut rng = StdRng::seed_from_u64(config.seed.unwrap());
		run(&config, &mut rng).unwrap();

		for path in [
			&config.unigram_probabilities_file,
			&config.bigram_probabilities_file,
		] {
			let written = fs::read_to_string(path).unwrap();
			assert_eq!(written.lines().count(), 2);
			assert!(written.lines().all(|line| line.starts_with("P(")));
		}

		// One perplexity per scored line, unknown tokens as the sentinel.
		for path in [
			&config.unigram_evaluation_file,
			&config.bigram_evaluation_file,
		] {
			let written = fs::read_to_string(path).unwrap();
			let lines: Vec<&str> = written.lines().collect();
			assert_eq!(lines.len(), 2);
			assert_eq!(lines[1], "undefined");
		}

		cleanup(&config);
	}

	#[test]
	fn short_evaluation_file_aborts_the_run() {
		let mut config = scratch_config("short");
		config.number_of_lines = 3;
		fs::write(&config.training_file, "a b c\n").unwrap();
		fs::write(&config.evaluation_file, "a b\n").unwrap();

		let mut rng = StdRng::seed_from_u64(0);
		let result = run(&config, &mut rng);
		assert!(matches!(
			result,
			Err(LmError::InsufficientEvaluationData { available: 1, required: 3 })
		));

		cleanup(&config);
	}
}
