use crate::{RandSource, ThreadRandom, WordGenerator, WordPool};
use std::sync::OnceLock;

static SHARED: OnceLock<BasicWordGenerator<'static, ThreadRandom>> = OnceLock::new();

/// The default [`WordGenerator`]: a borrowed pool plus an owned random source.
///
/// The pool is borrowed, not owned, so several generators (and threads) can
/// share one pool. To share a random source as well, pass `&source` or an
/// `Arc`.
///
/// # Example
/// ```
/// use passgen::{BasicWordGenerator, SeededRandom, WordGenerator, WordPool};
///
/// let pool = WordPool::new(["ant", "bee", "cat", "dog", "eel"]).unwrap();
/// let generator = BasicWordGenerator::new(&pool, SeededRandom::new(1));
///
/// let words = generator.generate_words(3).unwrap();
/// assert_eq!(words.len(), 3);
/// assert!(words.iter().all(|w| pool.contains(w)));
/// ```
#[derive(Clone, Debug)]
pub struct BasicWordGenerator<'a, R> {
    pool: &'a WordPool,
    rng: R,
}

impl<'a, R> BasicWordGenerator<'a, R>
where
    R: RandSource,
{
    /// Creates a generator drawing from `pool` with `rng`.
    pub const fn new(pool: &'a WordPool, rng: R) -> Self {
        Self { pool, rng }
    }
}

impl<R> BasicWordGenerator<'static, R>
where
    R: RandSource,
{
    /// Creates a generator over the bundled large word list.
    ///
    /// # Panics
    /// Panics if the bundled word list cannot be loaded; see
    /// [`WordPool::large`].
    pub fn with_rng(rng: R) -> Self {
        Self::new(WordPool::large(), rng)
    }
}

impl BasicWordGenerator<'static, ThreadRandom> {
    /// Returns the process-wide default generator: bundled word list and a
    /// secure [`ThreadRandom`] source.
    ///
    /// # Panics
    /// Panics if the bundled word list cannot be loaded.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::default)
    }
}

impl Default for BasicWordGenerator<'static, ThreadRandom> {
    fn default() -> Self {
        Self::with_rng(ThreadRandom)
    }
}

impl<R> WordGenerator for BasicWordGenerator<'_, R>
where
    R: RandSource,
{
    type Rng = R;

    fn pool(&self) -> &WordPool {
        self.pool
    }

    fn rng(&self) -> &R {
        &self.rng
    }
}
