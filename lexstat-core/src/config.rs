use std::env;
use std::path::PathBuf;

use crate::error::LexiconError;

/// Environment variable naming the directory of lexicon data files.
pub const DATA_DIR_VAR: &str = "LEXICON_DATA";

/// Reads the lexicon data directory from [`DATA_DIR_VAR`].
///
/// # Errors
/// Returns [`LexiconError::ConfigurationMissing`] if the variable is
/// unset or empty. The caller decides whether that is fatal.
pub fn default_data_dir() -> Result<PathBuf, LexiconError> {
	data_dir_from(DATA_DIR_VAR)
}

/// Reads the lexicon data directory from an arbitrary variable.
///
/// An empty value is treated the same as an unset variable.
pub fn data_dir_from(var: &'static str) -> Result<PathBuf, LexiconError> {
	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
		_ => Err(LexiconError::ConfigurationMissing(var)),
	}
}
