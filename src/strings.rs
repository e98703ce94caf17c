//! Normalization and format checks for clue, answer and answer-pattern strings.
//!
//! The normalized form of a string is the display form converted to
//! uppercase with everything but letters and digits removed. It is how
//! letters are treated in a crossword: `"Ice-cream!"` and `"ICECREAM"` are the
//! same entry.

use crate::config::CrypticConfig;
use crate::cryptic_char::CrypticChar;
use crate::errors::CrypticError;

/// Uppercase `s` and strip every character that is not a letter or digit.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_normalized_char())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `true` iff `a` and `b` have the same normalized form.
#[must_use]
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[must_use]
pub fn is_normalized(s: &str) -> bool {
    s == normalize(s)
}

pub fn check_normalized(s: &str) -> Result<(), Box<CrypticError>> {
    if is_normalized(s) {
        Ok(())
    } else {
        Err(Box::new(CrypticError::NotNormalized { s: s.to_string() }))
    }
}

/// An answer is non-empty and only uppercase letters, spaces and hyphens.
#[must_use]
pub fn is_answer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_answer_char())
}

pub fn check_answer(s: &str) -> Result<(), Box<CrypticError>> {
    if is_answer(s) {
        Ok(())
    } else {
        Err(Box::new(CrypticError::InvalidAnswer { answer: s.to_string() }))
    }
}

/// The letters of an answer with its word separators removed.
///
/// # Errors
/// `InvalidAnswer` if `s` is not in answer form.
pub fn normalize_answer(s: &str) -> Result<String, Box<CrypticError>> {
    check_answer(s)?;
    Ok(s.chars().filter(|c| !c.is_word_separator()).collect())
}

/// An answer pattern is non-empty and only uppercase letters, underscores,
/// spaces and hyphens.
#[must_use]
pub fn is_answer_pattern(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_answer_pattern_char())
}

pub fn check_answer_pattern(s: &str) -> Result<(), Box<CrypticError>> {
    if is_answer_pattern(s) {
        Ok(())
    } else {
        Err(Box::new(CrypticError::InvalidAnswerPattern { pattern: s.to_string() }))
    }
}

/// Reject clue text containing either configured indicator delimiter.
pub fn check_clue_text(clue: &str, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
    match clue.chars().find(|&c| config.is_delimiter(c)) {
        Some(delim) => Err(Box::new(CrypticError::StrayDelimiter { clue: clue.to_string(), delim })),
        None => Ok(()),
    }
}
