//! Memorable passphrases and random passwords.
//!
//! Two independent generators share one pattern: validate the parameters,
//! draw from a pool with an injected [`RandSource`], post-process, and join
//! into a string.
//!
//! - [`PassphraseGenerator`] draws distinct words from a [`WordPool`] (by
//!   default the bundled 7776-word EFF list), appends a digit to one of them and
//!   title-cases them: `Crayon-Sulfur7-Gumdrop`.
//! - [`PasswordGenerator`] composes letters, a digit and a special character
//!   from disjoint [`CharClasses`] and shuffles them: `f{uzP9pc`.
//!
//! Default generators use [`ThreadRandom`], a cryptographically secure
//! source. Swap in [`SeededRandom`] (or any `rand` generator through
//! [`RngSource`]) for reproducible output; only the randomness changes, never
//! the algorithm.
//!
//! ```
//! use passgen::{PassphraseGenerator, PassphraseOptions, PasswordGenerator, SeededRandom};
//!
//! let phrases = PassphraseGenerator::with_rng(SeededRandom::new(7));
//! let again = PassphraseGenerator::with_rng(SeededRandom::new(7));
//! let options = PassphraseOptions::default().with_word_amount(4);
//! assert_eq!(phrases.generate(&options).unwrap(), again.generate(&options).unwrap());
//!
//! let passwords: PasswordGenerator = PasswordGenerator::default();
//! assert_eq!(passwords.generate_default().unwrap().len(), 8);
//! ```
//!
//! ## Features
//! - `tracing`: trace spans around generation and debug events on rejected
//!   parameters. Generated values are never recorded.
//! - `serde`: `Serialize`/`Deserialize` for the option structs.
//! - `parking-lot`: use `parking_lot::Mutex` inside [`RngSource`].

mod charset;
mod error;
mod generator;
mod mutex;
mod pool;
mod rand;

pub use crate::charset::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::pool::*;
pub use crate::rand::*;
