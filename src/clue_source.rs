//! Where a clue's text comes from: a plain string, or a [`Combination`]
//! that wraps another clue's answer with literal text.
//!
//! Every clue type matches its indicator against the *output* projection of
//! its source. For a plain string that is the string itself; for a
//! Combination it is the text with the inner clue already solved, e.g.
//! `"Returned beer"` has output `"Returned LAGER"`, which a Reversal can then
//! work on.

use std::fmt;

use crate::clues::{Clue, ClueType};
use crate::errors::CrypticError;
use crate::strings::equals_normalized;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueSource {
    Text(String),
    Combination(Box<Combination>),
}

impl ClueSource {
    /// The surface text a solver reads.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            ClueSource::Text(s) => s,
            ClueSource::Combination(c) => &c.input,
        }
    }

    /// The text with any nested clue replaced by its answer.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            ClueSource::Text(s) => s,
            ClueSource::Combination(c) => &c.output,
        }
    }

    /// How many Combinations are nested inside this source.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            ClueSource::Text(_) => 0,
            ClueSource::Combination(c) => 1 + c.combined.clue().depth(),
        }
    }
}

impl From<&str> for ClueSource {
    fn from(s: &str) -> Self {
        ClueSource::Text(s.to_string())
    }
}

impl From<String> for ClueSource {
    fn from(s: String) -> Self {
        ClueSource::Text(s)
    }
}

impl From<Combination> for ClueSource {
    fn from(c: Combination) -> Self {
        ClueSource::Combination(Box::new(c))
    }
}

impl fmt::Display for ClueSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClueSource::Text(s) => write!(f, "{s}"),
            ClueSource::Combination(c) => write!(f, "{} [{}]", c.input, c.output),
        }
    }
}

#[must_use]
pub fn clue_input(clue: &ClueSource) -> &str {
    clue.input()
}

#[must_use]
pub fn clue_output(clue: &ClueSource) -> &str {
    clue.output()
}

/// `input` is `prefix + combined's clue text + suffix`; `output` is
/// `prefix + combined's answer + suffix` (both compared normalized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    input: String,
    prefix: String,
    combined: Clue,
    suffix: String,
    output: String,
}

impl Combination {
    /// ```
    /// use crypilot::clue_source::Combination;
    /// use crypilot::clues::Definition;
    ///
    /// let beer = Definition::new("beer", "LAGER").unwrap();
    /// let combo = Combination::new("Returned beer", "Returned ", beer.into(), "", "Returned LAGER").unwrap();
    /// assert_eq!(combo.output(), "Returned LAGER");
    /// ```
    ///
    /// # Errors
    /// `CombinationInputMismatch` or `CombinationOutputMismatch`.
    pub fn new(input: &str, prefix: &str, combined: Clue, suffix: &str, output: &str) -> Result<Self, Box<CrypticError>> {
        let expected_input = format!("{prefix}{}{suffix}", combined.clue_input());
        if !equals_normalized(input, &expected_input) {
            return Err(Box::new(CrypticError::CombinationInputMismatch {
                input: input.to_string(),
                expected: expected_input,
            }));
        }

        let expected_output = format!("{prefix}{}{suffix}", combined.answer());
        if !equals_normalized(output, &expected_output) {
            return Err(Box::new(CrypticError::CombinationOutputMismatch {
                output: output.to_string(),
                expected: expected_output,
            }));
        }

        Ok(Combination {
            input: input.to_string(),
            prefix: prefix.to_string(),
            combined,
            suffix: suffix.to_string(),
            output: output.to_string(),
        })
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn combined(&self) -> &Clue {
        &self.combined
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }
}
