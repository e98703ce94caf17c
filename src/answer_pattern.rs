use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;

use crate::cryptic_char::PATTERN_WILDCARD;
use crate::errors::CrypticError;
use crate::strings::{check_answer, check_answer_pattern};

/// Global, lazily initialized cache of compiled answer-pattern regexes.
///
/// Answer patterns repeat a lot (`_____` is a very common pattern), so each
/// distinct pattern is compiled once. The lock is held only for lookups and
/// inserts; compilation happens outside it.
///
/// The cache is unbounded: entries are never evicted, so memory grows with
/// the number of distinct patterns seen by the process. Patterns are short
/// and a puzzle has at most a few hundred of them.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

/// Return a compiled `Regex` for `pattern`, caching the result.
pub(crate) fn get_regex(pattern: &str) -> Result<Regex, Box<fancy_regex::Error>> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // if the lock is poisoned we just compile without caching
    if let Ok(guard) = cache.lock() && let Some(re) = guard.get(pattern).cloned() {
        return Ok(re);
    }

    let compiled = Regex::new(pattern)?;

    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

/// Translate an answer pattern into an anchored, case-insensitive regex string.
///
/// - `_` matches exactly one letter
/// - a space matches an optional run of whitespace
/// - a hyphen matches an optional hyphen
/// - letters match themselves
///
/// The answer is matched with its separators already removed, so the
/// separators in the pattern never constrain where word breaks fall.
pub(crate) fn answer_pattern_to_regex_str(answer_pattern: &str) -> String {
    let mut regex_str = String::from("(?i)^");
    for c in answer_pattern.chars() {
        match c {
            PATTERN_WILDCARD => regex_str.push('.'),
            ' ' => regex_str.push_str("\\s*"),
            '-' => regex_str.push_str("-?"),
            other => regex_str.push_str(&fancy_regex::escape(&other.to_string())),
        }
    }
    regex_str.push('$');
    regex_str
}

/// `true` iff `answer` fits `answer_pattern`.
///
/// # Errors
/// `InvalidAnswer` / `InvalidAnswerPattern` if either string is malformed.
///
/// ```
/// use crypilot::answer_pattern::answer_matches_pattern;
///
/// assert!(answer_matches_pattern("FOO", "F__").unwrap());
/// assert!(answer_matches_pattern("F-OO", "___").unwrap());
/// assert!(!answer_matches_pattern("FOO", "X__").unwrap());
/// ```
pub fn answer_matches_pattern(answer: &str, answer_pattern: &str) -> Result<bool, Box<CrypticError>> {
    check_answer(answer)?;
    check_answer_pattern(answer_pattern)?;

    let clean_answer: String = answer.chars().filter(char::is_ascii_alphabetic).collect();
    let regex = get_regex(&answer_pattern_to_regex_str(answer_pattern))?;
    regex
        .is_match(&clean_answer)
        .map_err(|e| Box::new(CrypticError::RegexError(e)))
}

/// Like [`answer_matches_pattern`], but a mismatch is an `AnswerPatternMismatch` error.
pub fn check_answer_matches_pattern(answer: &str, answer_pattern: &str) -> Result<(), Box<CrypticError>> {
    if answer_matches_pattern(answer, answer_pattern)? {
        Ok(())
    } else {
        Err(Box::new(CrypticError::AnswerPatternMismatch {
            answer: answer.to_string(),
            pattern: answer_pattern.to_string(),
        }))
    }
}
