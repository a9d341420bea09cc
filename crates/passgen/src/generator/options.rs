/// Call-time options for [`PassphraseGenerator::generate`].
///
/// With the `serde` feature the fields (de)serialize as `wordAmount`,
/// `separator`, `includeNumber` and `titleCaseWords`; missing fields take
/// their defaults.
///
/// [`PassphraseGenerator::generate`]: crate::PassphraseGenerator::generate
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PassphraseOptions {
    /// Number of words, `1..=pool.len()`. Default `3`.
    pub word_amount: usize,
    /// Placed between consecutive words. Default `"-"`.
    pub separator: String,
    /// Append one random digit to one random word. Default `true`.
    pub include_number: bool,
    /// Title-case the first letter of every word. Default `true`.
    pub title_case_words: bool,
}

impl PassphraseOptions {
    pub fn with_word_amount(mut self, word_amount: usize) -> Self {
        self.word_amount = word_amount;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_number(mut self, include_number: bool) -> Self {
        self.include_number = include_number;
        self
    }

    pub fn with_title_case(mut self, title_case_words: bool) -> Self {
        self.title_case_words = title_case_words;
        self
    }
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_amount: 3,
            separator: String::from("-"),
            include_number: true,
            title_case_words: true,
        }
    }
}

/// Call-time options for [`PasswordGenerator::generate`].
///
/// With the `serde` feature the fields (de)serialize as `size`,
/// `includeSpecial` and `includeNumber`; missing fields take their defaults.
///
/// [`PasswordGenerator::generate`]: crate::PasswordGenerator::generate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PasswordOptions {
    /// Total length in characters. Default `8`.
    pub size: usize,
    /// Reserve one position for a special character. Default `true`.
    pub include_special: bool,
    /// Reserve one position for a digit. Default `true`.
    pub include_number: bool,
}

impl PasswordOptions {
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub const fn with_special(mut self, include_special: bool) -> Self {
        self.include_special = include_special;
        self
    }

    pub const fn with_number(mut self, include_number: bool) -> Self {
        self.include_number = include_number;
        self
    }

    /// Positions reserved for the digit and special classes.
    pub const fn reserved(&self) -> usize {
        self.include_special as usize + self.include_number as usize
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            size: 8,
            include_special: true,
            include_number: true,
        }
    }
}
