// Character-class constants
pub(crate) const UPPERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

pub(crate) const WORD_SEPARATORS: &str = " -";
pub(crate) const PATTERN_WILDCARD: char = '_';

/// Character classes used by the answer and answer-pattern format checks.
pub(crate) trait CrypticChar {
    /// Survives normalization (letter or digit).
    fn is_normalized_char(&self) -> bool;
    /// May appear in an answer: A-Z, space, hyphen.
    fn is_answer_char(&self) -> bool;
    /// May appear in an answer pattern: answer chars plus the `_` wildcard.
    fn is_answer_pattern_char(&self) -> bool;
    fn is_word_separator(&self) -> bool;
}

impl CrypticChar for char {
    fn is_normalized_char(&self) -> bool {
        self.is_alphanumeric()
    }
    fn is_answer_char(&self) -> bool {
        UPPERCASE_ALPHABET.contains(self) || self.is_word_separator()
    }
    fn is_answer_pattern_char(&self) -> bool {
        self.is_answer_char() || *self == PATTERN_WILDCARD
    }
    fn is_word_separator(&self) -> bool {
        WORD_SEPARATORS.contains(*self)
    }
}
