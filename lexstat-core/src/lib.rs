//! Lexicon frequency-statistics library.
//!
//! This crate builds empirical letter and n-gram distributions from
//! per-language word lists, including:
//! - Normalized, deduplicated word sets loaded from plain-text lexicons
//! - A registry mapping language identifiers to their word sets
//! - Unicode-aware fixed-length substring extraction
//! - Character and substring frequency tables
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Word sets, the lexicon registry and the frequency counters.
///
/// This module exposes the statistics interface while keeping
/// filesystem plumbing private.
pub mod lexicon;

/// Typed errors for configuration and lexicon loading.
pub mod error;

/// Configuration lookup (lexicon data directory).
pub mod config;

/// I/O utilities (directory listing, path helpers).
///
/// Not exposed
pub(crate) mod io;
