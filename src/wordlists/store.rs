//! Categorized word pools
//!
//! Word sources are plain text made of three-line records:
//!
//! ```text
//! Animals
//! Elephant: Giraffe: Penguin
//!
//! ```
//!
//! The first line names the category, the second lists its words separated by
//! `": "`, the third is a blank separator. Parsing is lenient: the first
//! malformed record ends the parse and the categories read so far are kept.

use crate::core::{GameError, Word};
use rand::Rng;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Separator between words on a category's word line
pub const WORD_SEPARATOR: &str = ": ";

/// A named pool of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCategory {
    pub name: String,
    pub words: Vec<Word>,
}

impl WordCategory {
    #[must_use]
    pub const fn new(name: String, words: Vec<Word>) -> Self {
        Self { name, words }
    }
}

/// All categories loaded for one run, in source order
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    categories: Vec<WordCategory>,
}

impl WordStore {
    #[must_use]
    pub const fn new(categories: Vec<WordCategory>) -> Self {
        Self { categories }
    }

    /// Parse a word source from a reader
    ///
    /// # Errors
    /// Returns an I/O error only if reading fails. Malformed records are not errors.
    pub fn parse<R: BufRead>(reader: R) -> io::Result<Self> {
        parse_lines(reader.lines()).map(Self::new)
    }

    /// Parse a word source held in memory
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordStore;
    ///
    /// let store = WordStore::parse_str("Food\nPancake: Avocado\n\nTruncated\n");
    /// assert_eq!(store.names(), vec!["Food"]);
    /// assert_eq!(store.word_count(), 2);
    /// ```
    #[must_use]
    pub fn parse_str(source: &str) -> Self {
        // Reading from a &str cannot fail
        let categories = parse_lines(source.lines().map(|line| Ok(line.to_string())))
            .unwrap_or_default();
        Self::new(categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[WordCategory] {
        &self.categories
    }

    /// Category names in source order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a category by name
    ///
    /// An exact match wins; otherwise the first name equal ignoring ASCII case.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&WordCategory> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(name))
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of words across all categories
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }

    /// Pick a category uniformly at random, then a word uniformly within it
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` if there are no categories or the
    /// chosen category has no words.
    pub fn select_random<R: Rng>(&self, rng: &mut R) -> Result<(&str, &Word), GameError> {
        if self.categories.is_empty() {
            return Err(GameError::EmptyWordPool(None));
        }

        let category = &self.categories[rng.random_range(0..self.categories.len())];
        pick_word(category, rng)
    }

    /// Pick a random word from the named category
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordPool` if the category is unknown or empty.
    pub fn select_in<R: Rng>(&self, name: &str, rng: &mut R) -> Result<(&str, &Word), GameError> {
        let category = self
            .category(name)
            .ok_or_else(|| GameError::EmptyWordPool(Some(name.to_string())))?;
        pick_word(category, rng)
    }
}

fn pick_word<'a, R: Rng>(
    category: &'a WordCategory,
    rng: &mut R,
) -> Result<(&'a str, &'a Word), GameError> {
    if category.words.is_empty() {
        return Err(GameError::EmptyWordPool(Some(category.name.clone())));
    }

    let word = &category.words[rng.random_range(0..category.words.len())];
    Ok((category.name.as_str(), word))
}

fn parse_lines<I>(mut lines: I) -> io::Result<Vec<WordCategory>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut categories = Vec::new();

    loop {
        let Some(name) = lines.next().transpose()? else {
            break;
        };
        let word_line = lines.next().transpose()?;
        let separator = lines.next().transpose()?;

        let name = name.trim();
        if name.is_empty() && word_line.is_none() {
            // Trailing blank line at end of input
            break;
        }

        let Some(category) = parse_record(name, word_line.as_deref()) else {
            warn!(
                record = categories.len() + 1,
                name, "malformed word list record, stopping"
            );
            break;
        };

        if let Some(separator) = separator
            && !separator.trim().is_empty()
        {
            debug!(
                category = %category.name,
                line = %separator,
                "non-blank record separator ignored"
            );
        }

        categories.push(category);
    }

    Ok(categories)
}

fn parse_record(name: &str, word_line: Option<&str>) -> Option<WordCategory> {
    let word_line = word_line?.trim();
    if name.is_empty() || word_line.is_empty() {
        return None;
    }

    let words: Vec<Word> = word_line
        .split(WORD_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(category = name, entry = s, error = %e, "skipping word");
                None
            }
        })
        .collect();

    if words.is_empty() {
        return None;
    }

    Some(WordCategory::new(name.to_string(), words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn texts(category: &WordCategory) -> Vec<&str> {
        category.words.iter().map(Word::text).collect()
    }

    #[test]
    fn parse_multiple_records() {
        let store = WordStore::parse_str(
            "Animals\nElephant: Giraffe: Penguin\n\nFood\nPancake: Avocado\n\n",
        );

        assert_eq!(store.names(), vec!["Animals", "Food"]);
        assert_eq!(texts(&store.categories()[0]), vec!["Elephant", "Giraffe", "Penguin"]);
        assert_eq!(texts(&store.categories()[1]), vec!["Pancake", "Avocado"]);
    }

    #[test]
    fn parse_stops_at_truncated_record() {
        let store = WordStore::parse_str("Animals\nElephant: Giraffe\n\nFood\n");
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.categories()[0].name, "Animals");
    }

    #[test]
    fn parse_stops_at_empty_word_line() {
        let store = WordStore::parse_str("A\nx: y\n\nB\n\n\nC\nz\n\n");
        assert_eq!(store.names(), vec!["A"]);
    }

    #[test]
    fn parse_last_record_without_separator() {
        let store = WordStore::parse_str("Animals\nElephant: Giraffe");
        assert_eq!(store.word_count(), 2);
    }

    #[test]
    fn parse_trims_words_and_name() {
        let store = WordStore::parse_str("Countries  \r\n  New Zealand:  Peru \r\n\r\n");
        assert_eq!(store.names(), vec!["Countries"]);
        assert_eq!(texts(&store.categories()[0]), vec!["New Zealand", "Peru"]);
    }

    #[test]
    fn parse_requires_colon_space_separator() {
        let store = WordStore::parse_str("Countries\nPeru:Chile: Spain\n\n");
        assert_eq!(texts(&store.categories()[0]), vec!["Peru:Chile", "Spain"]);
    }

    #[test]
    fn parse_skips_words_without_letters() {
        let store = WordStore::parse_str("Mixed\nCat: 123: : Dog\n\n");
        assert_eq!(texts(&store.categories()[0]), vec!["Cat", "Dog"]);
    }

    #[test]
    fn parse_empty_source() {
        assert!(WordStore::parse_str("").is_empty());
        assert!(WordStore::parse_str("\n\n").is_empty());
    }

    #[test]
    fn parse_from_reader() {
        let source = "Animals\nElephant\n\n";
        let store = WordStore::parse(source.as_bytes()).unwrap();
        assert_eq!(store.word_count(), 1);
    }

    #[test]
    fn select_random_from_store() {
        let store = WordStore::parse_str("A\nalpha: apple\n\nB\nbeta: banana\n\n");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let (name, word) = store.select_random(&mut rng).unwrap();
            let category = store.category(name).unwrap();
            assert!(category.words.contains(word));
        }
    }

    #[test]
    fn select_random_reaches_every_category() {
        let store = WordStore::parse_str("A\nalpha\n\nB\nbeta\n\nC\ngamma\n\n");
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen: Vec<&str> = (0..200)
            .map(|_| store.select_random(&mut rng).unwrap().0)
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, vec!["A", "B", "C"]);
    }

    #[test]
    fn select_from_empty_store_fails() {
        let store = WordStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            store.select_random(&mut rng),
            Err(GameError::EmptyWordPool(None))
        );
    }

    #[test]
    fn select_from_empty_category_fails() {
        let store = WordStore::new(vec![WordCategory::new("Empty".to_string(), Vec::new())]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            store.select_random(&mut rng),
            Err(GameError::EmptyWordPool(Some("Empty".to_string())))
        );
    }

    #[test]
    fn category_lookup_prefers_exact_name() {
        let store = WordStore::parse_str("food\nApple\n\nFood\nPizza\n\n");
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(store.category("Food").unwrap().name, "Food");
        assert_eq!(store.category("food").unwrap().name, "food");
        assert_eq!(store.category("FOOD").unwrap().name, "food");

        let (name, word) = store.select_in("Food", &mut rng).unwrap();
        assert_eq!((name, word.text()), ("Food", "Pizza"));
    }

    #[test]
    fn select_in_named_category() {
        let store = WordStore::parse_str("Animals\nElephant\n\nFood\nPancake\n\n");
        let mut rng = StdRng::seed_from_u64(3);

        let (name, word) = store.select_in("food", &mut rng).unwrap();
        assert_eq!(name, "Food");
        assert_eq!(word.text(), "Pancake");

        assert_eq!(
            store.select_in("Vehicles", &mut rng),
            Err(GameError::EmptyWordPool(Some("Vehicles".to_string())))
        );
    }
}
