use std::collections::HashMap;

use super::substring::list_substrings;
use super::word_set::WordSet;

/// Occurrences of each codepoint across a word set.
///
/// Only observed codepoints appear as keys, each with a strictly
/// positive count.
pub type CharFrequencyTable = HashMap<char, usize>;

/// Occurrences of each fixed-length substring across a word set.
pub type SubstringFrequencyTable = HashMap<String, usize>;

/// Counts every codepoint occurrence in a word set.
///
/// A word containing `k` occurrences of a character contributes `k`
/// to that character's count, not 1. Pure function of the set:
/// identical inputs always yield the identical table, independent of
/// iteration order.
pub fn count_chars(words: &WordSet) -> CharFrequencyTable {
	let mut chars = CharFrequencyTable::new();
	for word in words.iter() {
		for ch in word.chars() {
			*chars.entry(ch).or_insert(0) += 1;
		}
	}
	chars
}

/// Counts every substring of the given length in a word set.
///
/// Windows overlap, so `"aaa"` contributes two occurrences of `"aa"`
/// at length 2. Words shorter than `length` contribute nothing; an
/// empty set yields an empty table.
pub fn count_substrings(words: &WordSet, length: usize) -> SubstringFrequencyTable {
	let mut substrings = SubstringFrequencyTable::new();
	for word in words.iter() {
		for substr in list_substrings(word, length) {
			*substrings.entry(substr).or_insert(0) += 1;
		}
	}
	substrings
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_set() -> WordSet {
		WordSet::from_lines(["bat", "cat", "cot"])
	}

	#[test]
	fn char_counts_accumulate_across_words() {
		let chars = count_chars(&sample_set());

		let expected = [('b', 1), ('a', 2), ('t', 3), ('c', 2), ('o', 1)];
		assert_eq!(chars.len(), expected.len());
		for (ch, count) in expected {
			assert_eq!(chars.get(&ch), Some(&count), "count for {ch:?}");
		}
	}

	#[test]
	fn char_count_total_matches_codepoint_total() {
		let set = WordSet::from_lines(["héllo", "ab", ""]);
		let chars = count_chars(&set);

		let total: usize = chars.values().sum();
		let codepoints: usize = set.iter().map(|w| w.chars().count()).sum();
		assert_eq!(total, codepoints);
	}

	#[test]
	fn bigram_counts_aggregate_shared_substrings() {
		let substrings = count_substrings(&sample_set(), 2);

		// "at" appears in both "bat" and "cat".
		let expected = [("ba", 1), ("at", 2), ("ca", 1), ("co", 1), ("ot", 1)];
		assert_eq!(substrings.len(), expected.len());
		for (sub, count) in expected {
			assert_eq!(substrings.get(sub), Some(&count), "count for {sub:?}");
		}
	}

	#[test]
	fn substring_count_total_matches_window_arithmetic() {
		let set = WordSet::from_lines(["a", "salut", "chien", ""]);
		for length in 1..=6 {
			let total: usize = count_substrings(&set, length).values().sum();
			let windows: usize = set
				.iter()
				.map(|w| w.chars().count().saturating_sub(length - 1))
				.sum();
			assert_eq!(total, windows, "total windows at length {length}");
		}
	}

	#[test]
	fn counts_never_include_zero_entries() {
		let chars = count_chars(&sample_set());
		assert!(chars.values().all(|&count| count > 0));
		assert_eq!(chars.get(&'z'), None);

		let substrings = count_substrings(&sample_set(), 3);
		assert!(substrings.values().all(|&count| count > 0));
		assert_eq!(substrings.get("zzz"), None);
	}

	#[test]
	fn empty_set_yields_empty_tables() {
		let set = WordSet::from_lines(Vec::<&str>::new());
		assert!(count_chars(&set).is_empty());
		assert!(count_substrings(&set, 2).is_empty());
	}

	#[test]
	fn identical_sets_yield_identical_tables() {
		let first = WordSet::from_lines(["chat", "chien", "loup"]);
		let second = WordSet::from_lines(["loup", "chien", "chat"]);
		assert_eq!(count_chars(&first), count_chars(&second));
		assert_eq!(count_substrings(&first, 2), count_substrings(&second, 2));
	}
}
