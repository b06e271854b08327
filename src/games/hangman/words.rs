/// Word list loading and random word selection
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Every secret word has exactly this many letters
pub const WORD_LENGTH: usize = 5;

#[derive(Debug, Display, Error)]
pub enum SourceError {
    /// The dictionary could not be opened or read
    #[display("could not read word list {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No word in the pool has the required length
    #[display("the word list contains no {}-letter words", WORD_LENGTH)]
    EmptyPool,
}

/// Picks an index into a non-empty pool.
///
/// Implementations must return a value below `len`. Callers never pass zero.
pub trait Chooser {
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadChooser;

impl Chooser for ThreadChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Uniform choice from a seeded generator, for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Chooser for SeededChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<C: Chooser + ?Sized> Chooser for Box<C> {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Read-only pool of candidate secret words, all lowercase and `WORD_LENGTH` long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Load every qualifying token from a whitespace separated word list.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let unavailable = |source| SourceError::Unavailable { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(unavailable)?;
        let pool = Self::from_reader(file).map_err(unavailable)?;

        info!(words = pool.len(), "loaded word list");
        Ok(pool)
    }

    pub fn from_reader(mut reader: impl Read) -> std::io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_words(text.split_whitespace()))
    }

    /// Build a pool from raw tokens. Tokens that are not `WORD_LENGTH` chars
    /// long after trimming and lower-casing are dropped.
    pub fn from_words<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_lowercase())
            .filter(|word| word.chars().count() == WORD_LENGTH)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Select one word uniformly through `chooser`.
    pub fn pick_random(&self, chooser: &mut impl Chooser) -> Result<&str, SourceError> {
        if self.words.is_empty() {
            return Err(SourceError::EmptyPool);
        }

        let len = self.words.len();
        let index = chooser.choose_index(len);
        debug_assert!(index < len, "chooser returned {index} for a pool of {len}");
        debug!(index, pool = len, "picked word index");
        Ok(&self.words[index % len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct Fixed(usize);

    impl Chooser for Fixed {
        fn choose_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_only_five_letter_words_are_kept() {
        let pool = WordPool::from_words(["cat", "apple", "mango", "zebra"]);
        assert_eq!(pool.words(), ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let pool = WordPool::from_words(["APPLE", "MaNgO"]);
        assert_eq!(pool.words(), ["apple", "mango"]);
    }

    #[test]
    fn test_reader_splits_on_any_whitespace() {
        let text = "cat apple\n\tmango\r\n  zebra  elephant\n";
        let pool = WordPool::from_reader(text.as_bytes()).unwrap();
        assert_eq!(pool.words(), ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cat APPLE mango").unwrap();
        writeln!(file, "zebra").unwrap();

        let pool = WordPool::load(file.path()).unwrap();
        assert_eq!(pool.words(), ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        match WordPool::load(&missing) {
            Err(SourceError::Unavailable { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_load_with_no_qualifying_words_is_not_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a bb ccc dddd eeeeee").unwrap();

        let pool = WordPool::load(file.path()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pick_from_empty_pool_fails() {
        let pool = WordPool::default();
        assert!(matches!(pool.pick_random(&mut ThreadChooser), Err(SourceError::EmptyPool)));
    }

    #[test]
    fn test_single_word_pool_always_yields_it() {
        let pool = WordPool::from_words(["apple"]);
        for _ in 0..20 {
            assert_eq!(pool.pick_random(&mut ThreadChooser).unwrap(), "apple");
        }
    }

    #[test]
    fn test_pick_uses_chooser_index() {
        let pool = WordPool::from_words(["apple", "mango", "zebra"]);
        assert_eq!(pool.pick_random(&mut Fixed(1)).unwrap(), "mango");
        assert_eq!(pool.pick_random(&mut Fixed(2)).unwrap(), "zebra");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_range_index_wraps() {
        let pool = WordPool::from_words(["apple", "mango", "zebra"]);
        assert_eq!(pool.pick_random(&mut Fixed(4)).unwrap(), "mango");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "chooser returned 4 for a pool of 3")]
    fn test_out_of_range_index_is_caught_in_debug() {
        let pool = WordPool::from_words(["apple", "mango", "zebra"]);
        let _ = pool.pick_random(&mut Fixed(4));
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let pool = WordPool::from_words(["apple", "mango", "zebra", "lemon", "grape"]);
        let mut a = SeededChooser::new(7);
        let mut b = SeededChooser::new(7);

        for _ in 0..10 {
            assert_eq!(pool.pick_random(&mut a).unwrap(), pool.pick_random(&mut b).unwrap());
        }
    }

    #[test]
    fn test_thread_chooser_stays_in_bounds() {
        let mut chooser = ThreadChooser;
        for _ in 0..100 {
            assert!(chooser.choose_index(3) < 3);
        }
    }
}
