//! Error types for clue construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E026) for documentation lookup.
//! Codes are grouped by [`ErrorCategory`]:
//!
//! - Format (E001-E004): a string fails a syntactic class check
//! - Template (E005-E009): a malformed indicator template or substitution map
//! - Match (E010): the substituted template does not reproduce the clue text
//! - Semantic (E011-E019): a wordplay derivation does not produce the answer
//! - Composite (E020-E024): a double solution does not hold together
//! - Internal (E025-E026): wrapped regex / nom failures
//!
//! # Examples
//!
//! ```
//! use crypilot::errors::{CrypticError, ErrorCategory};
//! use crypilot::strings::check_answer;
//!
//! match check_answer("Escort") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E001");
//!         assert_eq!(e.category(), ErrorCategory::Format);
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(()) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::fmt;
use std::io;

/// Which of the validation stages an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Template,
    Match,
    Semantic,
    Composite,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ErrorCategory::Format => "format",
            ErrorCategory::Template => "template",
            ErrorCategory::Match => "match",
            ErrorCategory::Semantic => "semantic",
            ErrorCategory::Composite => "composite",
            ErrorCategory::Internal => "internal",
        };
        write!(f, "{s}")
    }
}

/// Every way constructing a clue (or running one of its checks) can fail.
#[derive(Debug, thiserror::Error)]
pub enum CrypticError {
    // --- Format ---
    #[error("\"{answer}\" must be in \"answer\" form: only uppercase, spaces and hyphens")]
    InvalidAnswer { answer: String },

    #[error("\"{pattern}\" must be in answer pattern form: only uppercase, spaces, hyphens and underscores")]
    InvalidAnswerPattern { pattern: String },

    #[error("Clue text \"{clue}\" contains the indicator delimiter '{delim}'")]
    StrayDelimiter { clue: String, delim: char },

    #[error("\"{s}\" must be in normalized form")]
    NotNormalized { s: String },

    // --- Template ---
    #[error("Placeholder '{placeholder}' not found in indicator \"{indicator}\"")]
    PlaceholderNotFound { placeholder: String, indicator: String },

    #[error("Number of occurrences of {placeholder} ({found}) does not match the number of substitutions ({expected})")]
    PlaceholderCountMismatch { placeholder: String, found: usize, expected: usize },

    #[error("Malformed indicator \"{template}\": {reason}")]
    MalformedTemplate { template: String, reason: String },

    #[error("Malformed token string \"{text}\": {reason}")]
    MalformedTokens { text: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // --- Match ---
    #[error("Indicator must match: clue: \"{clue}\", indicator: \"{indicator}\", parts: {parts}, indicator replaced with parts: \"{substituted}\"")]
    IndicatorMismatch { clue: String, indicator: String, parts: String, substituted: String },

    // --- Semantic ---
    #[error("Combination input \"{input}\" does not match prefix+combined clue+suffix \"{expected}\"")]
    CombinationInputMismatch { input: String, expected: String },

    #[error("Combination output \"{output}\" does not match prefix+combined answer+suffix \"{expected}\"")]
    CombinationOutputMismatch { output: String, expected: String },

    #[error("Answer \"{answer}\" must be an anagram of \"{fodder}\"")]
    NotAnAnagram { fodder: String, answer: String },

    #[error("Hidden letters \"{hidden}\" must spell the answer \"{answer}\"")]
    HiddenMismatch { hidden: String, answer: String },

    #[error("Container parts \"{assembled}\" must spell the answer \"{answer}\"")]
    ContainerMismatch { assembled: String, answer: String },

    #[error("Kept letters \"{kept}\" must spell the answer \"{answer}\"")]
    DeletionKeepMismatch { kept: String, answer: String },

    #[error("Deleted letters \"{deleted}\" must match the stated deletion \"{deletion}\"")]
    DeletionDeleteMismatch { deleted: String, deletion: String },

    #[error("Answer \"{answer}\" must be the reversal of \"{fodder}\"")]
    NotAReversal { fodder: String, answer: String },

    #[error("Reversal answer \"{answer}\" must have at least 2 letters")]
    ReversalTooShort { answer: String },

    // --- Composite ---
    #[error("In a double solution, the clues for each solution should join to make the whole clue: \"{clue}\" != \"{joined}\"")]
    DoubleSolutionClueMismatch { clue: String, joined: String },

    #[error("In a double solution, the first solution must be different to the second: {solution}")]
    IdenticalSolutions { solution: String },

    #[error("In a double solution, both solution answers must match: \"{answer1}\" != \"{answer2}\"")]
    SolutionAnswersDiffer { answer1: String, answer2: String },

    #[error("Double solution answer \"{answer}\" does not match the solutions' answer \"{solution_answer}\"")]
    DoubleSolutionAnswerMismatch { answer: String, solution_answer: String },

    #[error("Answer \"{answer}\" does not fit the answer pattern \"{pattern}\"")]
    AnswerPatternMismatch { answer: String, pattern: String },

    // --- Internal ---
    #[error("Invalid regex pattern: {0}")]
    RegexError(#[from] fancy_regex::Error),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<CrypticError> for io::Error {
    fn from(ce: CrypticError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ce.to_string())
    }
}

impl From<Box<fancy_regex::Error>> for Box<CrypticError> {
    fn from(e: Box<fancy_regex::Error>) -> Self {
        Box::new(CrypticError::RegexError(*e))
    }
}

impl<'a> NomParseError<&'a str> for Box<CrypticError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(CrypticError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl CrypticError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CrypticError::InvalidAnswer { .. } => "E001",
            CrypticError::InvalidAnswerPattern { .. } => "E002",
            CrypticError::StrayDelimiter { .. } => "E003",
            CrypticError::NotNormalized { .. } => "E004",
            CrypticError::PlaceholderNotFound { .. } => "E005",
            CrypticError::PlaceholderCountMismatch { .. } => "E006",
            CrypticError::MalformedTemplate { .. } => "E007",
            CrypticError::MalformedTokens { .. } => "E008",
            CrypticError::InvalidConfig { .. } => "E009",
            CrypticError::IndicatorMismatch { .. } => "E010",
            CrypticError::CombinationInputMismatch { .. } => "E011",
            CrypticError::CombinationOutputMismatch { .. } => "E012",
            CrypticError::NotAnAnagram { .. } => "E013",
            CrypticError::HiddenMismatch { .. } => "E014",
            CrypticError::ContainerMismatch { .. } => "E015",
            CrypticError::DeletionKeepMismatch { .. } => "E016",
            CrypticError::DeletionDeleteMismatch { .. } => "E017",
            CrypticError::NotAReversal { .. } => "E018",
            CrypticError::ReversalTooShort { .. } => "E019",
            CrypticError::DoubleSolutionClueMismatch { .. } => "E020",
            CrypticError::IdenticalSolutions { .. } => "E021",
            CrypticError::SolutionAnswersDiffer { .. } => "E022",
            CrypticError::DoubleSolutionAnswerMismatch { .. } => "E023",
            CrypticError::AnswerPatternMismatch { .. } => "E024",
            CrypticError::RegexError(_) => "E025",
            CrypticError::NomError(_) => "E026",
        }
    }

    /// Returns the validation stage this error belongs to
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            CrypticError::InvalidAnswer { .. }
            | CrypticError::InvalidAnswerPattern { .. }
            | CrypticError::StrayDelimiter { .. }
            | CrypticError::NotNormalized { .. } => ErrorCategory::Format,
            CrypticError::PlaceholderNotFound { .. }
            | CrypticError::PlaceholderCountMismatch { .. }
            | CrypticError::MalformedTemplate { .. }
            | CrypticError::MalformedTokens { .. }
            | CrypticError::InvalidConfig { .. } => ErrorCategory::Template,
            CrypticError::IndicatorMismatch { .. } => ErrorCategory::Match,
            CrypticError::CombinationInputMismatch { .. }
            | CrypticError::CombinationOutputMismatch { .. }
            | CrypticError::NotAnAnagram { .. }
            | CrypticError::HiddenMismatch { .. }
            | CrypticError::ContainerMismatch { .. }
            | CrypticError::DeletionKeepMismatch { .. }
            | CrypticError::DeletionDeleteMismatch { .. }
            | CrypticError::NotAReversal { .. }
            | CrypticError::ReversalTooShort { .. } => ErrorCategory::Semantic,
            CrypticError::DoubleSolutionClueMismatch { .. }
            | CrypticError::IdenticalSolutions { .. }
            | CrypticError::SolutionAnswersDiffer { .. }
            | CrypticError::DoubleSolutionAnswerMismatch { .. }
            | CrypticError::AnswerPatternMismatch { .. } => ErrorCategory::Composite,
            CrypticError::RegexError(_) | CrypticError::NomError(_) => ErrorCategory::Internal,
        }
    }

    /// Short, one-line description of the variant (used in generated docs)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CrypticError::InvalidAnswer { .. } => "Invalid answer",
            CrypticError::InvalidAnswerPattern { .. } => "Invalid answer pattern",
            CrypticError::StrayDelimiter { .. } => "Clue text contains an indicator delimiter",
            CrypticError::NotNormalized { .. } => "String is not normalized",
            CrypticError::PlaceholderNotFound { .. } => "Placeholder missing from indicator",
            CrypticError::PlaceholderCountMismatch { .. } => "Placeholder occurrence count mismatch",
            CrypticError::MalformedTemplate { .. } => "Malformed indicator template",
            CrypticError::MalformedTokens { .. } => "Malformed token string",
            CrypticError::InvalidConfig { .. } => "Invalid configuration",
            CrypticError::IndicatorMismatch { .. } => "Indicator does not reproduce the clue",
            CrypticError::CombinationInputMismatch { .. } => "Combination input mismatch",
            CrypticError::CombinationOutputMismatch { .. } => "Combination output mismatch",
            CrypticError::NotAnAnagram { .. } => "Answer is not an anagram of the fodder",
            CrypticError::HiddenMismatch { .. } => "Hidden letters do not spell the answer",
            CrypticError::ContainerMismatch { .. } => "Container parts do not spell the answer",
            CrypticError::DeletionKeepMismatch { .. } => "Kept letters do not spell the answer",
            CrypticError::DeletionDeleteMismatch { .. } => "Deleted letters do not match the deletion",
            CrypticError::NotAReversal { .. } => "Answer is not the reversal of the fodder",
            CrypticError::ReversalTooShort { .. } => "Reversal answer too short",
            CrypticError::DoubleSolutionClueMismatch { .. } => "Solution clues do not join to the whole clue",
            CrypticError::IdenticalSolutions { .. } => "Both solutions are identical",
            CrypticError::SolutionAnswersDiffer { .. } => "Solution answers differ",
            CrypticError::DoubleSolutionAnswerMismatch { .. } => "Double solution answer mismatch",
            CrypticError::AnswerPatternMismatch { .. } => "Answer does not fit the pattern",
            CrypticError::RegexError(_) => "Invalid regex pattern",
            CrypticError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Longer explanation of when the variant is raised (used in generated docs)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CrypticError::InvalidAnswer { .. } => "Answers may only contain uppercase letters A-Z, spaces and hyphens, and must not be empty.",
            CrypticError::InvalidAnswerPattern { .. } => "Answer patterns may only contain uppercase letters, underscores (one unknown letter each), spaces and hyphens.",
            CrypticError::StrayDelimiter { .. } => "Clue text may not contain the configured indicator delimiters, since such text would be ambiguous with an indicator template.",
            CrypticError::NotNormalized { .. } => "The string was required to be in normalized form: uppercase letters and digits only.",
            CrypticError::PlaceholderNotFound { .. } => "A single-string part was supplied for a placeholder that does not (or no longer) appear in the indicator template.",
            CrypticError::PlaceholderCountMismatch { .. } => "A list part must supply exactly one substring per occurrence of its placeholder in the indicator template.",
            CrypticError::MalformedTemplate { .. } => "The indicator template has an unclosed placeholder or an empty placeholder name.",
            CrypticError::MalformedTokens { .. } => "A tokenized string has a separator in the wrong place: an empty token, or a token longer than one character that is not a placeholder.",
            CrypticError::InvalidConfig { .. } => "The indicator delimiters must differ from each other, and the token separator must be punctuation distinct from both delimiters.",
            CrypticError::IndicatorMismatch { .. } => "After substituting every part into the indicator template, the result does not equal the clue text (ignoring case, spaces and punctuation).",
            CrypticError::CombinationInputMismatch { .. } => "A Combination's input must equal its prefix, the combined clue's text and its suffix joined together.",
            CrypticError::CombinationOutputMismatch { .. } => "A Combination's output must equal its prefix, the combined clue's answer and its suffix joined together.",
            CrypticError::NotAnAnagram { .. } => "The letters of the fodder, rearranged, must give exactly the letters of the answer.",
            CrypticError::HiddenMismatch { .. } => "The hidden span of the clue, ignoring spaces and punctuation, must spell the answer.",
            CrypticError::ContainerMismatch { .. } => "The outer-left part, the inner part and the outer-right part joined must spell the answer.",
            CrypticError::DeletionKeepMismatch { .. } => "The kept parts of a deletion joined in order must spell the answer.",
            CrypticError::DeletionDeleteMismatch { .. } => "When a deletion is stated, the deleted parts joined in order must match it.",
            CrypticError::NotAReversal { .. } => "The fodder's letters read backwards must spell the answer.",
            CrypticError::ReversalTooShort { .. } => "A single letter reversed is itself, so a reversal needs at least two letters.",
            CrypticError::DoubleSolutionClueMismatch { .. } => "The first solution's clue, a space and the second solution's clue must make up the whole clue.",
            CrypticError::IdenticalSolutions { .. } => "A double solution may not pair a clue reading with itself.",
            CrypticError::SolutionAnswersDiffer { .. } => "Both readings of a double solution must lead to the same answer.",
            CrypticError::DoubleSolutionAnswerMismatch { .. } => "The answer stated for the double solution must be the answer both readings lead to.",
            CrypticError::AnswerPatternMismatch { .. } => "The answer must fit the letter count, known letters and word breaks of the answer pattern.",
            CrypticError::RegexError(_) => "An internal regular expression could not be compiled. This is usually a bug.",
            CrypticError::NomError(_) => "The low-level template parser failed. This is usually wrapped in a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CrypticError::InvalidAnswer { .. } => Some("Example: use 'ICE-CREAM' or 'ESCORT' instead of 'escort' or 'Ice_cream'"),
            CrypticError::InvalidAnswerPattern { .. } => Some("Example: '_____' for five letters, '___ ____' for two words, 'U_-O_' with known letters"),
            CrypticError::StrayDelimiter { .. } => Some("Remove the delimiter characters from the clue, or configure different delimiters"),
            CrypticError::PlaceholderNotFound { .. } => Some("Add the placeholder to the indicator (e.g. 'shredded <fodder>') or pass the part as absent"),
            CrypticError::PlaceholderCountMismatch { .. } => Some("Supply one list element per occurrence, e.g. '<keep><delete><keep>' takes keep=[\"DAR\", \"ING\"]"),
            CrypticError::MalformedTemplate { .. } => Some("Every placeholder needs a name and a closing delimiter, e.g. '<fodder>'"),
            CrypticError::MalformedTokens { .. } => Some("Separate every single character with exactly one separator, e.g. 'a|b|<x>'"),
            CrypticError::IndicatorMismatch { .. } => Some("Compare the substituted indicator with the clue text to find the difference"),
            CrypticError::ReversalTooShort { .. } => Some("Use a Definition for single-letter answers"),
            CrypticError::IdenticalSolutions { .. } => Some("Use two different readings of the clue, e.g. two definitions of different senses"),
            CrypticError::AnswerPatternMismatch { .. } => Some("Check the letter count: '_____' only accepts five-letter answers"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<CrypticError> {
        vec![
            CrypticError::InvalidAnswer { answer: "escort".to_string() },
            CrypticError::InvalidAnswerPattern { pattern: "abc!".to_string() },
            CrypticError::StrayDelimiter { clue: "a <b".to_string(), delim: '<' },
            CrypticError::NotNormalized { s: "Hello".to_string() },
            CrypticError::PlaceholderNotFound { placeholder: "<x>".to_string(), indicator: "y".to_string() },
            CrypticError::PlaceholderCountMismatch { placeholder: "<keep>".to_string(), found: 1, expected: 2 },
            CrypticError::MalformedTemplate { template: "<a".to_string(), reason: "unclosed".to_string() },
            CrypticError::MalformedTokens { text: "a||b".to_string(), reason: "empty".to_string() },
            CrypticError::InvalidConfig { reason: "same".to_string() },
            CrypticError::IndicatorMismatch {
                clue: "c".to_string(),
                indicator: "i".to_string(),
                parts: "{}".to_string(),
                substituted: "s".to_string(),
            },
            CrypticError::CombinationInputMismatch { input: "a".to_string(), expected: "b".to_string() },
            CrypticError::CombinationOutputMismatch { output: "a".to_string(), expected: "b".to_string() },
            CrypticError::NotAnAnagram { fodder: "abc".to_string(), answer: "ABD".to_string() },
            CrypticError::HiddenMismatch { hidden: "abc".to_string(), answer: "ABD".to_string() },
            CrypticError::ContainerMismatch { assembled: "abc".to_string(), answer: "ABD".to_string() },
            CrypticError::DeletionKeepMismatch { kept: "abc".to_string(), answer: "ABD".to_string() },
            CrypticError::DeletionDeleteMismatch { deleted: "a".to_string(), deletion: "b".to_string() },
            CrypticError::NotAReversal { fodder: "abc".to_string(), answer: "ABC".to_string() },
            CrypticError::ReversalTooShort { answer: "A".to_string() },
            CrypticError::DoubleSolutionClueMismatch { clue: "a".to_string(), joined: "b".to_string() },
            CrypticError::IdenticalSolutions { solution: "x".to_string() },
            CrypticError::SolutionAnswersDiffer { answer1: "A".to_string(), answer2: "B".to_string() },
            CrypticError::DoubleSolutionAnswerMismatch { answer: "A".to_string(), solution_answer: "B".to_string() },
            CrypticError::AnswerPatternMismatch { answer: "FOO".to_string(), pattern: "_".to_string() },
            CrypticError::NomError(ErrorKind::Tag),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = CrypticError::InvalidAnswer { answer: "escort".to_string() };
        assert_eq!(err.code(), "E001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E001"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `CrypticError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_errors() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 25);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in sample_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_categories_follow_code_ranges() {
        for err in sample_errors() {
            let n: u16 = err.code()[1..].parse().unwrap();
            let expected = match n {
                1..=4 => ErrorCategory::Format,
                5..=9 => ErrorCategory::Template,
                10 => ErrorCategory::Match,
                11..=19 => ErrorCategory::Semantic,
                20..=24 => ErrorCategory::Composite,
                _ => ErrorCategory::Internal,
            };
            assert_eq!(err.category(), expected, "wrong category for {}", err.code());
        }
    }

    /// Help text should add information beyond the message itself
    #[test]
    fn test_all_errors_have_helpful_messages() {
        for err in sample_errors() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(err.details().len() > err.description().len());
        }
    }

    #[test]
    fn test_count_mismatch_message_names_placeholder_and_counts() {
        let err = CrypticError::PlaceholderCountMismatch {
            placeholder: "<delete>".to_string(),
            found: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "Number of occurrences of <delete> (1) does not match the number of substitutions (2)"
        );
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = CrypticError::HiddenMismatch { hidden: "abc".to_string(), answer: "ABD".to_string() };
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), format!("{} (E014)", err));
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = CrypticError::NotNormalized { s: "x".to_string() }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("normalized form"));
    }
}
