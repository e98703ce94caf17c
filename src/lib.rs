//! Model and validate cryptic crossword clues.
//!
//! Each clue type (anagram, hidden word, container, deletion, reversal,
//! homophone, plain definition, and double solution) is a record that checks
//! itself on construction: the indicator template with the named parts
//! substituted must reproduce the clue text, and the wordplay applied to the
//! parts must give the answer.
//!
//! ```
//! use crypilot::clues::{Anagram, ClueType};
//!
//! let clue = Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORT").unwrap();
//! assert_eq!(clue.answer(), "ESCORT");
//! ```

pub mod answer_pattern;
pub mod clue_source;
pub mod clues;
pub mod config;
pub mod conversion;
mod cryptic_char;
pub mod errors;
pub mod indicator;
pub mod log;
pub mod solutions;
pub mod strings;

pub use answer_pattern::{answer_matches_pattern, check_answer_matches_pattern};
pub use clue_source::{ClueSource, Combination, clue_input, clue_output};
pub use clues::{Anagram, Clue, ClueType, Container, Definition, Deletion, Hidden, Homophone, Reversal};
pub use config::CrypticConfig;
pub use conversion::StringConversion;
pub use errors::{CrypticError, ErrorCategory};
pub use indicator::{IndicatorPart, IndicatorParts};
pub use solutions::DoubleSolution;
pub use strings::{equals_normalized, normalize};
