use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::LmError;

/// Reads the training file as one normalized string.
///
/// - Reads the entire UTF-8 file into memory
/// - Lowercases and trims it
/// - Replaces line breaks with spaces and collapses whitespace runs to a
///   single space, so the text tokenizes as one continuous document
pub(crate) fn read_training_text<P: AsRef<Path>>(filename: P) -> Result<String, LmError> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	let normalized: Vec<&str> = contents.split_whitespace().collect();
	Ok(normalized.join(" ").to_lowercase())
}

/// Reads the evaluation file, keeping its original line structure.
///
/// The text is lowercased and trimmed as a whole but line breaks are left
/// in place; the evaluator splits on them and trims each line itself.
pub(crate) fn read_evaluation_text<P: AsRef<Path>>(filename: P) -> Result<String, LmError> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.trim().to_lowercase())
}

/// Writes one item per line to a UTF-8 text file, via each item's
/// `Display` implementation.
pub(crate) fn write_lines<P: AsRef<Path>, T: Display>(
	filename: P,
	lines: &[T],
) -> Result<(), LmError> {
	let mut writer = BufWriter::new(File::create(filename)?);
	for line in lines {
		writeln!(writer, "{}", line)?;
	}
	writer.flush()?;
	Ok(())
}
