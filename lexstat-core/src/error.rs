use std::path::PathBuf;

/// Errors produced while configuring or loading lexicons.
///
/// Every variant is fatal for the load that raised it: the engine never
/// returns a partial word set or a partial registry. Callers decide
/// whether to terminate, report, or retry with another source.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
	/// The environment variable naming the lexicon data directory is
	/// unset or empty.
	#[error("configuration variable {0} is not set; it must name the lexicon data directory")]
	ConfigurationMissing(&'static str),

	/// A lexicon file could not be opened.
	#[error("cannot open lexicon source {path}: {source}")]
	SourceUnavailable {
		path: PathBuf,
		source: std::io::Error,
	},

	/// The lexicon directory could not be enumerated.
	#[error("cannot enumerate lexicon directory {path}: {source}")]
	DirectoryUnavailable {
		path: PathBuf,
		source: std::io::Error,
	},

	/// An I/O error occurred while reading an already-open source.
	#[error("read failure on lexicon source {path}: {source}")]
	ReadFailure {
		path: PathBuf,
		source: std::io::Error,
	},
}
