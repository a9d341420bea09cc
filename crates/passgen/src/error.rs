/// A result type defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `passgen` can produce.
///
/// Generation never clamps or corrects its input: a parameter outside its
/// valid domain is reported immediately as [`Error::InvalidArgument`]. Word
/// lists that cannot be read or parsed surface as
/// [`Error::ResourceUnavailable`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A numeric parameter or a custom pool fell outside its valid domain.
    ///
    /// Raised for a word count outside `[1, pool.len()]`, a password length
    /// of zero or one too small to hold the reserved digit/special
    /// positions, a requested character class that is empty, and pools or
    /// classes that are malformed at construction.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A word list could not be loaded.
    ///
    /// For the bundled list this is fatal: default-constructed generators
    /// cannot work without it.
    #[error("resource unavailable: {reason}")]
    ResourceUnavailable { reason: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(%reason, "rejected generation parameters");
        Self::InvalidArgument { reason }
    }

    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            reason: reason.into(),
        }
    }
}
