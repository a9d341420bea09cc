use crate::{Error, RandSource, Result, WordPool};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A minimal interface for drawing unique words from a [`WordPool`].
///
/// Implementors only say *where* words come from ([`Self::pool`]) and *how*
/// the dice are rolled ([`Self::rng`]); [`Self::generate_words`] provides the
/// selection itself.
pub trait WordGenerator {
    /// The random source driving selection.
    type Rng: RandSource;

    /// The candidate words.
    fn pool(&self) -> &WordPool;

    /// The random source used for every draw.
    fn rng(&self) -> &Self::Rng;

    /// Draws `count` distinct words from [`Self::pool`].
    ///
    /// A copy of the pool is shuffled and the first `count` words are
    /// returned, so selection is uniform and without replacement. The pool
    /// itself is never modified: every call draws from the full pool.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] unless `1 <= count <= pool.len()`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn generate_words(&self, count: usize) -> Result<Vec<String>> {
        let pool = self.pool();
        if count == 0 || count > pool.len() {
            return Err(Error::invalid(format!(
                "word count must be in [1, {}], got {count}",
                pool.len()
            )));
        }

        let mut words: Vec<&str> = pool.iter().collect();
        self.rng().shuffle(&mut words);
        Ok(words.into_iter().take(count).map(str::to_owned).collect())
    }
}
