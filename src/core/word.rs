//! Validated word values
//!
//! A `Word` is a non-empty string of lowercase ASCII letters. Validation
//! happens once at construction; downstream stages rely on it when they
//! persist tokens.

use std::fmt;

/// A non-empty, lowercase, ASCII-alphabetic word
///
/// This is the strict form accepted by the ingest stage. Already-curated
/// lists (re-split input) use the looser [`is_alphabetic_word`] check
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic,
    NonAscii,
    NotLowercase,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must be non-empty"),
            Self::NonAlphabetic => write!(f, "Word must contain only alphabetic characters"),
            Self::NonAscii => write!(f, "Word must contain only ASCII characters"),
            Self::NotLowercase => write!(f, "Word must be entirely lowercase"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a token
    ///
    /// # Errors
    /// Returns `WordError` if the token is empty, contains a
    /// non-alphabetic or non-ASCII character, or is not fully lowercase.
    ///
    /// # Examples
    /// ```
    /// use wordlist_curator::core::Word;
    ///
    /// let word = Word::new("banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("Apple").is_err());
    /// assert!(Word::new("12345").is_err());
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, WordError> {
        let token: String = token.into();

        if token.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked in the same order the raw list is filtered:
        // alphabetic, then ASCII, then case.
        if !token.chars().all(char::is_alphabetic) {
            return Err(WordError::NonAlphabetic);
        }

        if !token.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !token.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NotLowercase);
        }

        Ok(Self(token))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Character length of the word
    ///
    /// Bytes and characters coincide since the word is ASCII.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty token never validates
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a line from an already-curated list
///
/// Accepts any non-empty, fully alphabetic string. Mixed case and
/// non-ASCII alphabetic input pass here; curated lists are assumed
/// normalized upstream and must not be rejected on those grounds.
#[must_use]
pub fn is_alphabetic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}
