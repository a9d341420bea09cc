use crate::{
    BasicWordGenerator, PassphraseOptions, RandSource, Result, ThreadRandom, WordGenerator,
    WordPool,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Builds memorable passphrases such as `Crayon-Sulfur7-Gumdrop`.
///
/// Word selection is delegated to a [`WordGenerator`]; the digit draws use
/// that generator's random source, so the whole passphrase comes from one
/// stream and is exactly reproducible for a seeded source.
///
/// ## Steps
/// 1. Draw `word_amount` distinct words.
/// 2. If `include_number`, draw a digit in `0..10`, then a word index, and
///    append the digit to that word only.
/// 3. If `title_case_words`, title-case each word's first character when it
///    is lowercase. Runs after step 2, so `sulfur7` becomes `Sulfur7`.
/// 4. Join with `separator`.
///
/// # Example
/// ```
/// use passgen::{PassphraseGenerator, PassphraseOptions};
///
/// let generator: PassphraseGenerator = PassphraseGenerator::default();
/// let phrase = generator
///     .generate(&PassphraseOptions::default().with_separator("&"))
///     .unwrap();
///
/// assert_eq!(phrase.split('&').count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PassphraseGenerator<W = BasicWordGenerator<'static, ThreadRandom>> {
    words: W,
}

impl<'a, R> PassphraseGenerator<BasicWordGenerator<'a, R>>
where
    R: RandSource,
{
    /// Creates a generator drawing from `pool` with `rng`.
    pub const fn new(pool: &'a WordPool, rng: R) -> Self {
        Self::from_word_generator(BasicWordGenerator::new(pool, rng))
    }
}

impl<R> PassphraseGenerator<BasicWordGenerator<'static, R>>
where
    R: RandSource,
{
    /// Creates a generator over the bundled large word list.
    ///
    /// # Panics
    /// Panics if the bundled word list cannot be loaded; see
    /// [`WordPool::large`].
    pub fn with_rng(rng: R) -> Self {
        Self::from_word_generator(BasicWordGenerator::with_rng(rng))
    }
}

impl<W> PassphraseGenerator<W>
where
    W: WordGenerator,
{
    /// Wraps an existing word generator.
    pub const fn from_word_generator(words: W) -> Self {
        Self { words }
    }

    /// The underlying word generator.
    pub fn word_generator(&self) -> &W {
        &self.words
    }

    /// Generates a passphrase.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `options.word_amount` is outside
    /// `[1, pool.len()]`.
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, options: &PassphraseOptions) -> Result<String> {
        let mut words = self.words.generate_words(options.word_amount)?;

        // Custom word generators may hand back no words at all.
        if options.include_number && !words.is_empty() {
            let rng = self.words.rng();
            let number = rng.next_int(10);
            let index = rng.next_int(words.len());
            words[index].push_str(&number.to_string());
        }

        if options.title_case_words {
            for word in &mut words {
                *word = capitalized(word);
            }
        }

        Ok(words.join(&options.separator))
    }

    /// Generates a passphrase with [`PassphraseOptions::default`]: three
    /// title-cased words joined by `-`, one carrying a digit.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the pool holds fewer than three
    /// words.
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    pub fn generate_default(&self) -> Result<String> {
        self.generate(&PassphraseOptions::default())
    }
}

impl Default for PassphraseGenerator {
    fn default() -> Self {
        Self::with_rng(ThreadRandom)
    }
}

/// Title-cases the first character if it is lowercase; the rest is kept.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = titlecase(first);
            out.push_str(chars.as_str());
            out
        }
        _ => word.to_owned(),
    }
}

/// Titlecase mapping of a single character.
///
/// Differs from upper-casing for the Latin digraphs (`ǆ` becomes `ǅ`) and for
/// characters whose upper case expands to several letters, where only the
/// first stays upper case (`ß` becomes `Ss`, `ﬁ` becomes `Fi`). `ŉ` keeps
/// its full upper-case expansion.
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => return String::from('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => return String::from('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => return String::from('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => return String::from('ǲ'),
        'ŉ' => return c.to_uppercase().collect(),
        _ => {}
    }

    let mut upper = c.to_uppercase();
    let mut out = String::new();
    out.extend(upper.next());
    out.extend(upper.flat_map(char::to_lowercase));
    out
}
