//! A double solution: a clue made of two independent clues for the same
//! answer, written one after the other.

use std::fmt;

use log::debug;

use crate::answer_pattern::check_answer_matches_pattern;
use crate::clue_source::ClueSource;
use crate::clues::{Clue, ClueType};
use crate::config::CrypticConfig;
use crate::errors::CrypticError;
use crate::strings::{check_answer, check_answer_pattern, check_clue_text, equals_normalized};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleSolution {
    clue: ClueSource,
    answer_pattern: String,
    solution1: Clue,
    solution2: Clue,
    answer: String,
}

impl DoubleSolution {
    /// ```
    /// use crypilot::clues::Definition;
    /// use crypilot::solutions::DoubleSolution;
    ///
    /// let blind = DoubleSolution::new(
    ///     "Not seeing window covering",
    ///     "_____",
    ///     Definition::new("Not seeing", "BLIND").unwrap().into(),
    ///     Definition::new("window covering", "BLIND").unwrap().into(),
    ///     "BLIND",
    /// );
    /// assert!(blind.is_ok());
    /// ```
    pub fn new(clue: &str, answer_pattern: &str, solution1: Clue, solution2: Clue, answer: &str) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, answer_pattern, solution1, solution2, answer)
    }

    /// # Errors
    /// Format errors for the pattern, answer or clue text, then the first
    /// failing composite check: `DoubleSolutionClueMismatch`,
    /// `IdenticalSolutions`, `SolutionAnswersDiffer`,
    /// `DoubleSolutionAnswerMismatch`, `AnswerPatternMismatch`.
    pub fn with_config(
        config: &CrypticConfig,
        clue: &str,
        answer_pattern: &str,
        solution1: Clue,
        solution2: Clue,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let result = validate(config, clue, answer_pattern, &solution1, &solution2, answer);
        match &result {
            Ok(()) => debug!("DoubleSolution \"{clue}\" validated"),
            Err(e) => debug!("DoubleSolution \"{clue}\" rejected ({}): {e}", e.code()),
        }
        result?;

        Ok(DoubleSolution {
            clue: clue.into(),
            answer_pattern: answer_pattern.to_string(),
            solution1,
            solution2,
            answer: answer.to_string(),
        })
    }

    #[must_use]
    pub fn answer_pattern(&self) -> &str {
        &self.answer_pattern
    }

    #[must_use]
    pub fn solution1(&self) -> &Clue {
        &self.solution1
    }

    #[must_use]
    pub fn solution2(&self) -> &Clue {
        &self.solution2
    }
}

fn validate(
    config: &CrypticConfig,
    clue: &str,
    answer_pattern: &str,
    solution1: &Clue,
    solution2: &Clue,
    answer: &str,
) -> Result<(), Box<CrypticError>> {
    check_answer_pattern(answer_pattern)?;
    check_answer(answer)?;
    check_clue_text(clue, config)?;

    // surface text only: nested answers never appear in the outer clue
    let joined = format!("{} {}", solution1.clue_input(), solution2.clue_input());
    if !equals_normalized(clue, &joined) {
        return Err(Box::new(CrypticError::DoubleSolutionClueMismatch { clue: clue.to_string(), joined }));
    }

    if solution1 == solution2 {
        return Err(Box::new(CrypticError::IdenticalSolutions { solution: solution1.to_string() }));
    }

    if solution1.answer() != solution2.answer() {
        return Err(Box::new(CrypticError::SolutionAnswersDiffer {
            answer1: solution1.answer().to_string(),
            answer2: solution2.answer().to_string(),
        }));
    }

    if solution1.answer() != answer {
        return Err(Box::new(CrypticError::DoubleSolutionAnswerMismatch {
            answer: answer.to_string(),
            solution_answer: solution1.answer().to_string(),
        }));
    }

    check_answer_matches_pattern(answer, answer_pattern)
}

impl ClueType for DoubleSolution {
    fn clue(&self) -> &ClueSource {
        &self.clue
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

impl fmt::Display for DoubleSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DoubleSolution(\"{}\" ({}) -> {})", self.clue_input(), self.answer_pattern, self.answer)
    }
}
