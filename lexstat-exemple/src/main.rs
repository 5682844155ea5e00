use lexstat_core::config;
use lexstat_core::lexicon::frequency::{count_chars, count_substrings};
use lexstat_core::lexicon::registry::LexiconRegistry;

/// Returns the `top` entries of a frequency table, most frequent first.
fn top_entries<K: Clone + Ord>(table: &std::collections::HashMap<K, usize>, top: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = table.iter().map(|(k, v)| (k.clone(), *v)).collect();
    // Sort by descending count, then by key for a stable display.
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(top);
    entries
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The LEXICON_DATA variable names the directory of lexicon files,
    // one plain-text word list per language.
    let data_dir = config::default_data_dir()?;

    // Load every lexicon found in the directory.
    // A missing directory or an unreadable file aborts the whole load.
    let registry = LexiconRegistry::load(&data_dir)?;
    println!("Loaded {} lexicon(s) from {}", registry.len(), data_dir.display());

    // The language identifier is the file name.
    let mut lexicons: Vec<_> = registry.iter().collect();
    lexicons.sort_by_key(|(name, _)| name.to_owned());

    for (name, words) in lexicons {
        println!("\n{name}: {} words", words.len());

        // Character distribution.
        let chars = count_chars(words);
        println!("  top characters:");
        for (ch, count) in top_entries(&chars, 5) {
            println!("    {ch:?}: {count}");
        }

        // Bigram distribution; any length works, 2 is the classic choice.
        let bigrams = count_substrings(words, 2);
        println!("  top bigrams:");
        for (bigram, count) in top_entries(&bigrams, 5) {
            println!("    {bigram:?}: {count}");
        }
    }

    Ok(())
}
