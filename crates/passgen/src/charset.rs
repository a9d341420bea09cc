//! Character classes used to compose passwords.

use crate::{Error, Result};

/// `a-z` followed by `A-Z`.
pub const LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// `0-9`.
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Special characters accepted by common password policies (the Oracle list
/// of allowed password punctuation).
///
/// The order and the repeated `?` are part of the default behavior: each
/// entry is one equally likely draw.
pub const SPECIALS: &[char] = &[
    '@', '%', '+', '\\', '/', '\'', '!', '#', '$', '^', '?', ':', ',', '(', ')', '{', '?', '[',
    ']', '~', '`', '-', '_', '.',
];

/// The three disjoint character classes a password is composed from.
///
/// # Example
/// ```
/// use passgen::CharClasses;
///
/// let classes = CharClasses::new("abc".chars(), "123".chars(), "!?".chars()).unwrap();
/// assert_eq!(classes.digits(), ['1', '2', '3']);
///
/// // Classes may not overlap.
/// assert!(CharClasses::new("abc1".chars(), "123".chars(), "!?".chars()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharClasses {
    letters: Vec<char>,
    digits: Vec<char>,
    specials: Vec<char>,
}

impl CharClasses {
    /// Builds character classes from anything yielding characters.
    ///
    /// Order is kept; a class may repeat a character to weight it. Empty
    /// classes are accepted here and rejected when a password needs them.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if two classes share a character.
    pub fn new(
        letters: impl IntoIterator<Item = char>,
        digits: impl IntoIterator<Item = char>,
        specials: impl IntoIterator<Item = char>,
    ) -> Result<Self> {
        let classes = Self {
            letters: letters.into_iter().collect(),
            digits: digits.into_iter().collect(),
            specials: specials.into_iter().collect(),
        };
        classes.check_disjoint()?;
        Ok(classes)
    }

    fn check_disjoint(&self) -> Result<()> {
        let named = [
            ("letters", &self.letters),
            ("digits", &self.digits),
            ("specials", &self.specials),
        ];
        for (i, (name, class)) in named.iter().enumerate() {
            for (other_name, other) in &named[i + 1..] {
                if let Some(c) = class.iter().find(|c| other.contains(*c)) {
                    return Err(Error::invalid(format!(
                        "character {c:?} appears in both {name} and {other_name}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Characters that fill every unreserved position.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Characters drawn for the reserved digit position.
    pub fn digits(&self) -> &[char] {
        &self.digits
    }

    /// Characters drawn for the reserved special position.
    pub fn specials(&self) -> &[char] {
        &self.specials
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            letters: LETTERS.to_vec(),
            digits: DIGITS.to_vec(),
            specials: SPECIALS.to_vec(),
        }
    }
}
