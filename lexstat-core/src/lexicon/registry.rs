use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::word_set::WordSet;
use crate::error::LexiconError;
use crate::io;

/// Mapping from language identifier to its loaded [`WordSet`].
///
/// The registry discovers every regular file in a lexicon directory and
/// loads each one as a language, keyed by file name (extension included;
/// the file contents never influence the key).
///
/// # Responsibilities
/// - Enumerate the lexicon directory
/// - Load every discovered source through [`WordSet::load`]
/// - Fail fast: one bad source aborts the whole load
///
/// # Invariants
/// - Keys are unique file names
/// - Built once per `load` call, never mutated afterwards
///
/// # Notes
/// - Two sources enumerating to the same name resolve by plain map
///   overwrite (last one wins). This is collision handling, not merging;
///   rely on distinct file names.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LexiconRegistry {
	lexicons: HashMap<String, WordSet>,
}

impl LexiconRegistry {
	/// Loads every lexicon file found in a directory.
	///
	/// # Parameters
	/// - `dir`: Path to the lexicon data directory.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Enumerates regular files directly contained in the directory
	///   (subdirectories are ignored).
	/// - Loads each file as one language word set.
	/// - Sources are processed in whatever order enumeration yields them.
	///
	/// # Errors
	/// - [`LexiconError::DirectoryUnavailable`] if the directory cannot
	///   be enumerated
	/// - Any [`WordSet::load`] error for an individual source, propagated
	///   as-is: the registry does not skip a bad file and continue
	pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, LexiconError> {
		let folder = io::normalize_folder(dir.as_ref());

		let names = io::list_files(&folder).map_err(|source| LexiconError::DirectoryUnavailable {
			path: folder.clone(),
			source,
		})?;

		let mut lexicons = HashMap::new();
		for name in names {
			let set = WordSet::load(folder.join(&name))?;
			lexicons.insert(name, set);
		}

		info!(dir = %folder.display(), lexicons = lexicons.len(), "loaded lexicon directory");
		Ok(Self { lexicons })
	}

	/// Returns the word set for a language, if loaded.
	pub fn get(&self, language: &str) -> Option<&WordSet> {
		self.lexicons.get(language)
	}

	/// Returns the list of loaded language identifiers.
	///
	/// Provides owned copies of the keys; order is unspecified.
	pub fn names(&self) -> Vec<String> {
		self.lexicons.keys().map(|k| k.to_owned()).collect::<Vec<_>>()
	}

	/// Iterates over `(language, word set)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &WordSet)> {
		self.lexicons.iter().map(|(name, set)| (name.as_str(), set))
	}

	/// Returns the number of loaded languages.
	pub fn len(&self) -> usize {
		self.lexicons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lexicons.is_empty()
	}
}
