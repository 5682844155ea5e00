/// Lists all contiguous substrings of a word with the given length.
///
/// Semantics are defined over codepoints, not bytes: a word of `n`
/// codepoints yields `max(n - length + 1, 0)` substrings, one per
/// starting offset, in left-to-right order. A multi-byte character is
/// never split.
///
/// # Edge cases
/// - `length > n`: empty result (a short word contributes nothing to
///   n-grams longer than itself)
/// - `length == 0`: empty result, by deliberate choice; the arithmetic
///   alone would suggest `n + 1` empty strings
///
/// Pure function: no state is retained across calls, and no input fails.
pub fn list_substrings(word: &str, length: usize) -> Vec<String> {
	if length == 0 {
		return Vec::new();
	}

	// Cast the word as a char slice for codepoint-safe windows.
	let chars: Vec<char> = word.chars().collect();
	if chars.len() < length {
		return Vec::new();
	}

	let count = chars.len() - length + 1;
	let mut substrings = Vec::with_capacity(count);
	for start in 0..count {
		substrings.push(chars[start..start + length].iter().collect());
	}
	substrings
}
