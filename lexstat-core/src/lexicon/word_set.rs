use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LexiconError;

/// The canonical word collection for one language.
///
/// A `WordSet` holds every distinct word of a lexicon source after
/// normalization. Insertion order is irrelevant and duplicates collapse,
/// so a source listing the same word twice contributes one entry.
///
/// # Responsibilities
/// - Normalize each candidate word (trim surrounding whitespace, fold to lowercase)
/// - Collapse duplicates into a single entry
/// - Load a whole lexicon file, all-or-nothing
///
/// # Invariants
/// - Every member is already normalized; normalization happens exactly
///   once, at construction, never later
/// - The set is immutable after construction
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
	/// Normalized words, duplicates collapsed.
	words: HashSet<String>,
}

impl WordSet {
	/// Builds a word set from an iterator of candidate lines.
	///
	/// Each line is trimmed and folded to lowercase before insertion.
	/// A blank line yields the empty string, which is kept: the engine
	/// does not filter degenerate entries.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words = lines
			.into_iter()
			.map(|line| normalize(line.as_ref()))
			.collect();
		Self { words }
	}

	/// Loads a word set from a plain-text lexicon file, one word per line.
	///
	/// Reads the entire file into memory before splitting on
	/// `\n` / `\r\n`.
	///
	/// # Errors
	/// - [`LexiconError::SourceUnavailable`] if the file cannot be opened
	/// - [`LexiconError::ReadFailure`] if reading fails mid-stream
	///
	/// There is no partial result: a failure discards everything read
	/// so far.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
		let path = path.as_ref();

		let mut file = File::open(path).map_err(|source| LexiconError::SourceUnavailable {
			path: path.to_path_buf(),
			source,
		})?;

		let mut contents = String::new();
		file.read_to_string(&mut contents)
			.map_err(|source| LexiconError::ReadFailure {
				path: path.to_path_buf(),
				source,
			})?;

		let set = Self::from_lines(contents.lines());
		debug!(path = %path.display(), words = set.len(), "loaded lexicon source");
		Ok(set)
	}

	/// Returns the number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Checks membership of an already-normalized word.
	///
	/// No normalization is applied here; `contains("Cat")` is false even
	/// when `"cat"` is a member.
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Iterates over the words in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}

/// Canonical word form: surrounding whitespace stripped, lowercase.
fn normalize(line: &str) -> String {
	line.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn normalizes_and_deduplicates() {
		let set = WordSet::from_lines(["Cat", "  cat\t", "CAT"]);
		assert_eq!(set.len(), 1);
		assert!(set.contains("cat"));
		assert!(!set.contains("Cat"));
	}

	#[test]
	fn blank_line_yields_the_empty_word() {
		let set = WordSet::from_lines([""]);
		assert_eq!(set.len(), 1);
		assert!(set.contains(""));
	}

	#[test]
	fn empty_input_yields_an_empty_set() {
		let set = WordSet::from_lines(Vec::<&str>::new());
		assert!(set.is_empty());
	}

	#[test]
	fn unicode_words_survive_case_folding() {
		let set = WordSet::from_lines(["Éléphant", "éléphant"]);
		assert_eq!(set.len(), 1);
		assert!(set.contains("éléphant"));
	}

	#[test]
	fn loads_one_word_per_line() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "bat\ncat\ncot").unwrap();

		let set = WordSet::load(file.path()).unwrap();
		assert_eq!(set.len(), 3);
		for word in ["bat", "cat", "cot"] {
			assert!(set.contains(word));
		}
	}

	#[test]
	fn loading_twice_is_idempotent() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "Alpha\nbeta\nALPHA").unwrap();

		let first = WordSet::load(file.path()).unwrap();
		let second = WordSet::load(file.path()).unwrap();
		assert_eq!(first, second);
		assert_eq!(first.len(), 2);
	}

	#[test]
	fn missing_file_is_source_unavailable() {
		let err = WordSet::load("/nonexistent/lexicon.txt").unwrap_err();
		assert!(matches!(err, LexiconError::SourceUnavailable { .. }));
	}
}
