//! Word store loading utilities
//!
//! Builds a `WordStore` from a word file, from a JSON category map, or from the
//! embedded default list.

use super::{DEFAULT_WORDS, WordCategory, WordStore};
use crate::core::Word;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::info;

/// Load a word store from a file in the three-line record format
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let store = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} categories", store.categories().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = WordStore::parse(BufReader::new(file))?;

    info!(
        path = %path.display(),
        categories = store.categories().len(),
        words = store.word_count(),
        "loaded word list"
    );
    Ok(store)
}

/// Build a store from a category → words map
///
/// Entries without letters are skipped. Categories come out in key order.
#[must_use]
pub fn from_category_map(map: &BTreeMap<String, Vec<String>>) -> WordStore {
    let categories = map
        .iter()
        .map(|(name, words)| {
            let words = words.iter().filter_map(|w| Word::new(w.as_str()).ok()).collect();
            WordCategory::new(name.clone(), words)
        })
        .collect();

    WordStore::new(categories)
}

/// The word list compiled into the binary
#[must_use]
pub fn default_store() -> WordStore {
    WordStore::parse_str(DEFAULT_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_keeps_key_order() {
        let mut map = BTreeMap::new();
        map.insert("food".to_string(), vec!["Pancake".to_string()]);
        map.insert(
            "animals".to_string(),
            vec!["Cat".to_string(), "  ".to_string(), "Dog".to_string()],
        );

        let store = from_category_map(&map);
        assert_eq!(store.names(), vec!["animals", "food"]);
        assert_eq!(store.categories()[0].words.len(), 2);
    }

    #[test]
    fn default_store_is_populated() {
        let store = default_store();
        assert_eq!(store.names(), vec!["Animals", "Food", "Countries", "Programming"]);
        assert!(store.categories().iter().all(|c| !c.words.is_empty()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
