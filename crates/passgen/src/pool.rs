//! Word pools.
//!
//! A [`WordPool`] is the ordered, duplicate-free candidate set a passphrase is
//! drawn from. The bundled list is the EFF large diceware list (7776 lowercase
//! words, four of them hyphenated, one per line in dice order). It is embedded
//! at compile time and parsed once on first access.

use crate::{Error, Result};
use core::str::FromStr;
use std::{collections::HashSet, fs, path::Path, sync::OnceLock};

/// Number of words in the bundled large word list.
pub const LARGE_WORDLIST_SIZE: usize = 7776;

const LARGE_WORDLIST: &str = include_str!("../wordlists/large.txt");

static LARGE_POOL: OnceLock<Result<WordPool>> = OnceLock::new();

/// An ordered collection of distinct, non-empty words.
///
/// Pools are immutable once built. Generators borrow them, so one pool can
/// back any number of generators and calls; readers never need to
/// synchronize.
///
/// An empty pool is valid to construct, but every generation request against
/// it fails with [`Error::InvalidArgument`].
///
/// # Example
/// ```
/// use passgen::WordPool;
///
/// let pool = WordPool::new(["correct", "horse", "battery", "staple"]).unwrap();
/// assert_eq!(pool.len(), 4);
/// assert!(pool.contains("horse"));
///
/// assert!(WordPool::new(["echo", "echo"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Builds a pool from `words`, preserving their order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if a word is empty or appears more
    /// than once.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(Error::invalid(format!("word at index {index} is empty")));
            }
            if !seen.insert(word.as_str()) {
                return Err(Error::invalid(format!(
                    "duplicate word {word:?} at index {index}"
                )));
            }
        }
        Ok(Self { words })
    }

    /// Parses a word list with one word per line.
    ///
    /// Surrounding whitespace (including `\r`) is trimmed and blank lines are
    /// skipped; order is preserved as read.
    ///
    /// # Errors
    /// Returns [`Error::ResourceUnavailable`] if the list contains duplicate
    /// words.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.lines().map(str::trim).filter(|line| !line.is_empty())).map_err(
            |err| match err {
                Error::InvalidArgument { reason } => {
                    Error::unavailable(format!("malformed word list: {reason}"))
                }
                other => other,
            },
        )
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    /// Returns [`Error::ResourceUnavailable`] if the file cannot be read or is
    /// malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::unavailable(format!("cannot read word list {}: {err}", path.display()))
        })?;
        Self::parse(&text)
    }

    /// Returns the bundled large word list, parsing it on first use.
    ///
    /// The outcome is computed once per process and cached, failure
    /// included.
    ///
    /// # Errors
    /// Returns [`Error::ResourceUnavailable`] if the bundled list is
    /// malformed.
    pub fn try_large() -> Result<&'static WordPool> {
        LARGE_POOL
            .get_or_init(|| {
                let pool = Self::parse(LARGE_WORDLIST);
                #[cfg(feature = "tracing")]
                match &pool {
                    Ok(pool) => tracing::debug!(words = pool.len(), "loaded bundled word list"),
                    Err(err) => tracing::error!(%err, "bundled word list unavailable"),
                }
                pool
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the bundled large word list.
    ///
    /// # Panics
    /// Panics if the bundled list cannot be loaded. Default generators cannot
    /// operate without it, so this is treated as unrecoverable. Use
    /// [`Self::try_large`] to handle the failure instead.
    pub fn large() -> &'static WordPool {
        match Self::try_large() {
            Ok(pool) => pool,
            Err(err) => panic!("{err}"),
        }
    }

    /// Number of words in the pool.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the pool holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in pool order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterates over the words in pool order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns `true` if `word` is a member of the pool.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl FromStr for WordPool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<[String]> for WordPool {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}
