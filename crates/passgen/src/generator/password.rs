use crate::{CharClasses, Error, PasswordOptions, RandSource, Result, ThreadRandom};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Builds random passwords from three disjoint [`CharClasses`].
///
/// One position is reserved for a digit when `include_number` is set and one
/// for a special character when `include_special` is set; every other
/// position is a letter. Each position samples its class independently and
/// with replacement. The characters are drawn digit first, then special, then
/// letters, and the whole sequence is shuffled with the same random source so
/// the reserved characters can land anywhere.
///
/// # Example
/// ```
/// use passgen::{PasswordGenerator, PasswordOptions, SPECIALS};
///
/// let generator: PasswordGenerator = PasswordGenerator::default();
/// let password = generator
///     .generate(&PasswordOptions::default().with_size(12))
///     .unwrap();
///
/// assert_eq!(password.chars().count(), 12);
/// assert!(password.chars().any(|c| c.is_ascii_digit()));
/// assert!(password.chars().any(|c| SPECIALS.contains(&c)));
/// ```
#[derive(Clone, Debug)]
pub struct PasswordGenerator<R = ThreadRandom> {
    rng: R,
    classes: CharClasses,
}

impl<R> PasswordGenerator<R>
where
    R: RandSource,
{
    /// Creates a generator with the default character classes.
    pub fn new(rng: R) -> Self {
        Self::with_classes(rng, CharClasses::default())
    }

    /// Creates a generator with custom character classes.
    pub const fn with_classes(rng: R, classes: CharClasses) -> Self {
        Self { rng, classes }
    }

    /// The character classes in use.
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// The random source used for every draw.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Generates a password.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `options.size` is zero, if it is
    /// smaller than the number of reserved positions, or if a class that is
    /// needed is empty. Nothing is drawn from the random source on error.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, options: &PasswordOptions) -> Result<String> {
        let size = options.size;
        if size == 0 {
            return Err(Error::invalid("password length must be positive"));
        }

        let reserved = options.reserved();
        let letters = size.checked_sub(reserved).ok_or_else(|| {
            Error::invalid(format!(
                "password length {size} cannot hold {reserved} reserved positions"
            ))
        })?;
        let numbers = usize::from(options.include_number);
        let specials = usize::from(options.include_special);

        let plan = [
            ("digits", self.classes.digits(), numbers),
            ("specials", self.classes.specials(), specials),
            ("letters", self.classes.letters(), letters),
        ];
        if let Some((name, _, _)) = plan
            .iter()
            .find(|(_, class, count)| *count > 0 && class.is_empty())
        {
            return Err(Error::invalid(format!(
                "character class {name} is empty but required"
            )));
        }

        let mut chars = Vec::with_capacity(size);
        for (_, class, count) in plan {
            chars.extend((0..count).map(|_| class[self.rng.next_int(class.len())]));
        }
        self.rng.shuffle(&mut chars);

        Ok(chars.into_iter().collect())
    }

    /// Generates a password with [`PasswordOptions::default`]: eight
    /// characters including one digit and one special character.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] only for custom classes lacking
    /// letters, digits or specials.
    pub fn generate_default(&self) -> Result<String> {
        self.generate(&PasswordOptions::default())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}
