//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `CrypticError` via its `code()`, `category()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crypilot::errors::{CrypticError, ErrorCategory};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of every `CrypticError` variant, in code order
fn all_error_variants() -> Vec<CrypticError> {
    vec![
        CrypticError::InvalidAnswer { answer: "Escort".to_string() },
        CrypticError::InvalidAnswerPattern { pattern: "5 letters".to_string() },
        CrypticError::StrayDelimiter { clue: "shredded <corset".to_string(), delim: '<' },
        CrypticError::NotNormalized { s: "Ice cream".to_string() },
        CrypticError::PlaceholderNotFound {
            placeholder: "<fodder>".to_string(),
            indicator: "shredded <target>".to_string(),
        },
        CrypticError::PlaceholderCountMismatch { placeholder: "<delete>".to_string(), found: 1, expected: 2 },
        CrypticError::MalformedTemplate {
            template: "shredded <fodder".to_string(),
            reason: "unclosed placeholder starting at \"<fodder\"".to_string(),
        },
        CrypticError::MalformedTokens {
            text: "a||b".to_string(),
            reason: "empty token at position 1 (separator at an end, or doubled)".to_string(),
        },
        CrypticError::InvalidConfig { reason: "indicator delimiters must differ, got '<' and '<'".to_string() },
        CrypticError::IndicatorMismatch {
            clue: "mangled corset".to_string(),
            indicator: "shredded <fodder>".to_string(),
            parts: "{fodder: \"corset\"}".to_string(),
            substituted: "shredded corset".to_string(),
        },
        CrypticError::CombinationInputMismatch { input: "Returned ale".to_string(), expected: "Returned beer".to_string() },
        CrypticError::CombinationOutputMismatch { output: "Returned ALE".to_string(), expected: "Returned LAGER".to_string() },
        CrypticError::NotAnAnagram { fodder: "corset".to_string(), answer: "ESCORTS".to_string() },
        CrypticError::HiddenMismatch { hidden: "ermine, de".to_string(), answer: "ERMINED".to_string() },
        CrypticError::ContainerMismatch { assembled: "PUAL".to_string(), answer: "PAUL".to_string() },
        CrypticError::DeletionKeepMismatch { kept: "TAR".to_string(), answer: "RAT".to_string() },
        CrypticError::DeletionDeleteMismatch { deleted: "S".to_string(), deletion: "T".to_string() },
        CrypticError::NotAReversal { fodder: "lager".to_string(), answer: "LAGER".to_string() },
        CrypticError::ReversalTooShort { answer: "A".to_string() },
        CrypticError::DoubleSolutionClueMismatch {
            clue: "Not seeing window covering".to_string(),
            joined: "window covering Not seeing".to_string(),
        },
        CrypticError::IdenticalSolutions { solution: "Definition(\"Not seeing\" -> BLIND)".to_string() },
        CrypticError::SolutionAnswersDiffer { answer1: "BLIND".to_string(), answer2: "SHADE".to_string() },
        CrypticError::DoubleSolutionAnswerMismatch { answer: "BLINDS".to_string(), solution_answer: "BLIND".to_string() },
        CrypticError::AnswerPatternMismatch { answer: "BLIND".to_string(), pattern: "____".to_string() },
        // RegexError--create by attempting to compile an invalid regex
        CrypticError::RegexError(regex_error()),
        // NomError--use a common error kind
        CrypticError::NomError(nom::error::ErrorKind::Char),
    ]
}

fn regex_error() -> fancy_regex::Error {
    match fancy_regex::Regex::new("(?P<invalid") {
        Err(e) => e,
        Ok(_) => unreachable!("\"(?P<invalid\" is not a valid regex"),
    }
}

const CATEGORIES: [(ErrorCategory, &str, &str); 6] = [
    (ErrorCategory::Format, "Format Errors", "A string is not in the form its role requires."),
    (ErrorCategory::Template, "Template Errors", "An indicator template or its substitution parts are malformed."),
    (ErrorCategory::Match, "Match Errors", "The indicator with its parts substituted does not reproduce the clue."),
    (ErrorCategory::Semantic, "Semantic Errors", "The wordplay applied to the parts does not give the answer."),
    (ErrorCategory::Composite, "Composite Errors", "The two halves of a double solution do not fit together."),
    (ErrorCategory::Internal, "Internal Errors", "Wrapped failures from the regex engine or the template parser."),
];

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    for (_, title, _) in CATEGORIES {
        println!("- [{}](#{})", title, title.to_lowercase().replace(' ', "-"));
    }
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    for (category, title, blurb) in CATEGORIES {
        println!("## {}\n", title);
        println!("{}\n", blurb);
        generate_error_docs!(all_error_variants().into_iter().filter(|e| e.category() == category));
    }

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: \"Escort\" must be in \"answer\" form: only uppercase, spaces and hyphens (E001)");
    println!("Example: use 'ICE-CREAM' or 'ESCORT' instead of 'escort' or 'Ice_cream'");
    println!("```\n");
    println!("1. Note the error code (e.g., `E001`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_documented_once_in_order() {
        let codes: Vec<&str> = all_error_variants().iter().map(CrypticError::code).collect();
        let expected: Vec<String> = (1..=26).map(|n| format!("E{n:03}")).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_every_category_has_a_section() {
        for error in all_error_variants() {
            assert!(CATEGORIES.iter().any(|(c, _, _)| *c == error.category()), "{} has no section", error.code());
        }
    }
}
