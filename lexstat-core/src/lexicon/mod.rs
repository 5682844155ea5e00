//! Top-level module for the lexicon-statistics system.
//!
//! This crate provides per-language frequency statistics, including:
//! - Normalized word sets (`WordSet`)
//! - Multi-lexicon discovery and loading (`LexiconRegistry`)
//! - Unicode-aware substring extraction (`list_substrings`)
//! - Character and n-gram counting (`count_chars`, `count_substrings`)

/// A deduplicated set of normalized words loaded from one lexicon source.
///
/// Handles line normalization (trim + lowercase), duplicate collapsing,
/// and all-or-nothing file loading.
pub mod word_set;

/// Mapping from language identifier to `WordSet`.
///
/// Discovers lexicon files in a directory and loads each one,
/// keyed by file name.
pub mod registry;

/// Fixed-length substring (n-gram) extraction over codepoints.
///
/// Never splits a multi-byte character; degenerate lengths yield
/// empty results rather than failing.
pub mod substring;

/// Frequency tables over a word set.
///
/// Character counting and, via the substring extractor,
/// n-gram counting for a caller-chosen length.
pub mod frequency;
