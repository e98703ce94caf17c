//! The seven clue-construction types, and the [`Clue`] sum over them.
//!
//! Every type validates itself in its constructor and is immutable
//! afterwards, so holding a value means holding a valid clue. Each
//! constructor runs the same pipeline, stopping at the first failure:
//!
//! 1. Format: the clue text has no indicator delimiters, the answer is in
//!    answer form.
//! 2. Match: the indicator with the named parts substituted reproduces the
//!    clue's output text (see [`crate::clue_source`]).
//! 3. Semantic: the wordplay applied to the parts gives the answer.
//!
//! The plain `new` constructors use [`CrypticConfig::default`]; the
//! `with_config` ones take an explicit config.

use std::fmt;

use log::debug;

use crate::clue_source::ClueSource;
use crate::config::CrypticConfig;
use crate::errors::CrypticError;
use crate::indicator::{IndicatorPart, IndicatorParts, check_indicator_matches};
use crate::strings::{check_answer, check_clue_text, normalize, normalize_answer};

/// What every clue type exposes, whatever its wordplay.
pub trait ClueType {
    fn clue(&self) -> &ClueSource;
    fn answer(&self) -> &str;

    /// Surface text of the clue.
    fn clue_input(&self) -> &str {
        self.clue().input()
    }

    /// Clue text with any nested clue already solved.
    fn clue_output(&self) -> &str {
        self.clue().output()
    }
}

// --- shared pipeline steps ---

fn check_clue_source(clue: &ClueSource, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
    check_clue_text(clue.input(), config)?;
    if clue.output() != clue.input() {
        check_clue_text(clue.output(), config)?;
    }
    Ok(())
}

fn check_format(clue: &ClueSource, answer: &str, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
    check_clue_source(clue, config)?;
    check_answer(answer)
}

/// Log the outcome of a constructor and pass it through.
fn logged<T>(kind: &str, clue: &ClueSource, result: Result<T, Box<CrypticError>>) -> Result<T, Box<CrypticError>> {
    match &result {
        Ok(_) => debug!("{kind} \"{}\" validated", clue.input()),
        Err(e) => debug!("{kind} \"{}\" rejected ({}): {e}", clue.input(), e.code()),
    }
    result
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

// --- Definition ---

/// A straight definition: the clue text simply means the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    clue: ClueSource,
    answer: String,
}

impl Definition {
    /// ```
    /// use crypilot::clues::{ClueType, Definition};
    ///
    /// let def = Definition::new("Chaperone", "ESCORT").unwrap();
    /// assert_eq!(def.answer(), "ESCORT");
    /// ```
    pub fn new(clue: impl Into<ClueSource>, answer: &str) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, answer)
    }

    pub fn with_config(config: &CrypticConfig, clue: impl Into<ClueSource>, answer: &str) -> Result<Self, Box<CrypticError>> {
        let clue = clue.into();
        let result = check_format(&clue, answer, config);
        logged("Definition", &clue, result)?;
        Ok(Definition { clue, answer: answer.to_string() })
    }
}

// --- Anagram ---

/// The fodder's letters rearranged give the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anagram {
    clue: ClueSource,
    indicator: String,
    fodder: String,
    answer: String,
}

impl Anagram {
    /// ```
    /// use crypilot::clues::Anagram;
    ///
    /// assert!(Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORT").is_ok());
    /// assert!(Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORTS").is_err());
    /// ```
    pub fn new(clue: impl Into<ClueSource>, indicator: &str, fodder: &str, answer: &str) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, fodder, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        fodder: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Anagram {
            clue: clue.into(),
            indicator: indicator.to_string(),
            fodder: fodder.to_string(),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Anagram", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let parts = IndicatorParts::new().with("fodder", self.fodder.as_str());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)?;
        if sorted_chars(&normalize(&self.fodder)) != sorted_chars(&normalize_answer(&self.answer)?) {
            return Err(Box::new(CrypticError::NotAnAnagram {
                fodder: self.fodder.clone(),
                answer: self.answer.clone(),
            }));
        }
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn fodder(&self) -> &str {
        &self.fodder
    }
}

// --- Hidden ---

/// The answer is spelled out inside the clue text, across word breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hidden {
    clue: ClueSource,
    indicator: String,
    left: Option<String>,
    hidden: String,
    right: String,
    answer: String,
}

impl Hidden {
    pub fn new(
        clue: impl Into<ClueSource>,
        indicator: &str,
        left: Option<&str>,
        hidden: &str,
        right: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, left, hidden, right, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        left: Option<&str>,
        hidden: &str,
        right: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Hidden {
            clue: clue.into(),
            indicator: indicator.to_string(),
            left: left.map(str::to_string),
            hidden: hidden.to_string(),
            right: right.to_string(),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Hidden", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let parts = IndicatorParts::new()
            .with("left", self.left.as_deref())
            .with("hidden", self.hidden.as_str())
            .with("right", self.right.as_str());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)?;
        if normalize(&self.hidden) != normalize_answer(&self.answer)? {
            return Err(Box::new(CrypticError::HiddenMismatch {
                hidden: self.hidden.clone(),
                answer: self.answer.clone(),
            }));
        }
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn hidden(&self) -> &str {
        &self.hidden
    }

    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }
}

// --- Container ---

/// One part placed inside another: `outer_left + inner + outer_right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    clue: ClueSource,
    indicator: String,
    outer_left: String,
    outer_right: String,
    inner: String,
    answer: String,
}

impl Container {
    pub fn new(
        clue: impl Into<ClueSource>,
        indicator: &str,
        outer_left: &str,
        outer_right: &str,
        inner: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, outer_left, outer_right, inner, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        outer_left: &str,
        outer_right: &str,
        inner: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Container {
            clue: clue.into(),
            indicator: indicator.to_string(),
            outer_left: outer_left.to_string(),
            outer_right: outer_right.to_string(),
            inner: inner.to_string(),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Container", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let parts = IndicatorParts::new()
            .with("outer_left", self.outer_left.as_str())
            .with("outer_right", self.outer_right.as_str())
            .with("inner", self.inner.as_str());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)?;
        let assembled = format!("{}{}{}", self.outer_left, self.inner, self.outer_right);
        if normalize(&assembled) != normalize(&self.answer) {
            return Err(Box::new(CrypticError::ContainerMismatch {
                assembled,
                answer: self.answer.clone(),
            }));
        }
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn outer_left(&self) -> &str {
        &self.outer_left
    }

    #[must_use]
    pub fn outer_right(&self) -> &str {
        &self.outer_right
    }

    #[must_use]
    pub fn inner(&self) -> &str {
        &self.inner
    }
}

// --- Deletion ---

/// Letters removed from the clue text; what is kept spells the answer.
///
/// `keep` and `delete` may each be a list when the same placeholder occurs
/// several times, e.g. `"<keep><delete><keep> heartlessly"`. `deletion`, when
/// given, is clue text naming what was removed and is cross-checked against
/// `delete`; the answer never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    clue: ClueSource,
    indicator: String,
    keep: IndicatorPart,
    delete: IndicatorPart,
    deletion: Option<String>,
    answer: String,
}

impl Deletion {
    /// ```
    /// use crypilot::clues::Deletion;
    ///
    /// let deletion = Deletion::new(
    ///     "DARLING heartlessly",
    ///     "<keep><delete><keep> heartlessly",
    ///     vec!["DAR", "ING"],
    ///     "L",
    ///     None,
    ///     "DARING",
    /// );
    /// assert!(deletion.is_ok());
    /// ```
    pub fn new(
        clue: impl Into<ClueSource>,
        indicator: &str,
        keep: impl Into<IndicatorPart>,
        delete: impl Into<IndicatorPart>,
        deletion: Option<&str>,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, keep, delete, deletion, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        keep: impl Into<IndicatorPart>,
        delete: impl Into<IndicatorPart>,
        deletion: Option<&str>,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Deletion {
            clue: clue.into(),
            indicator: indicator.to_string(),
            keep: keep.into(),
            delete: delete.into(),
            deletion: deletion.map(str::to_string),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Deletion", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let parts = IndicatorParts::new()
            .with("keep", self.keep.clone())
            .with("delete", self.delete.clone())
            .with("deletion", self.deletion.clone());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)?;
        let kept = self.keep.joined();
        if normalize(&kept) != normalize(&self.answer) {
            return Err(Box::new(CrypticError::DeletionKeepMismatch {
                kept,
                answer: self.answer.clone(),
            }));
        }
        if let Some(deletion) = &self.deletion {
            let deleted = self.delete.joined();
            if normalize(&deleted) != normalize(deletion) {
                return Err(Box::new(CrypticError::DeletionDeleteMismatch {
                    deleted,
                    deletion: deletion.clone(),
                }));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn keep(&self) -> &IndicatorPart {
        &self.keep
    }

    #[must_use]
    pub fn delete(&self) -> &IndicatorPart {
        &self.delete
    }

    #[must_use]
    pub fn deletion(&self) -> Option<&str> {
        self.deletion.as_deref()
    }
}

// --- Reversal ---

/// The fodder read backwards gives the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    clue: ClueSource,
    indicator: String,
    fodder: String,
    answer: String,
}

impl Reversal {
    pub fn new(clue: impl Into<ClueSource>, indicator: &str, fodder: &str, answer: &str) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, fodder, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        fodder: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Reversal {
            clue: clue.into(),
            indicator: indicator.to_string(),
            fodder: fodder.to_string(),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Reversal", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let letters = normalize_answer(&self.answer)?;
        // a single letter is its own reversal
        if letters.chars().count() < 2 {
            return Err(Box::new(CrypticError::ReversalTooShort { answer: self.answer.clone() }));
        }
        let parts = IndicatorParts::new().with("fodder", self.fodder.as_str());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)?;
        let reversed: String = normalize(&self.fodder).chars().rev().collect();
        if reversed != letters {
            return Err(Box::new(CrypticError::NotAReversal {
                fodder: self.fodder.clone(),
                answer: self.answer.clone(),
            }));
        }
        Ok(())
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn fodder(&self) -> &str {
        &self.fodder
    }
}

// --- Homophone ---

/// The answer sounds like `sound_alike`. Only the indicator is checked:
/// pronunciation is the setter's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homophone {
    clue: ClueSource,
    indicator: String,
    sound_alike: String,
    answer: String,
}

impl Homophone {
    pub fn new(clue: impl Into<ClueSource>, indicator: &str, sound_alike: &str, answer: &str) -> Result<Self, Box<CrypticError>> {
        Self::with_config(&CrypticConfig::default(), clue, indicator, sound_alike, answer)
    }

    pub fn with_config(
        config: &CrypticConfig,
        clue: impl Into<ClueSource>,
        indicator: &str,
        sound_alike: &str,
        answer: &str,
    ) -> Result<Self, Box<CrypticError>> {
        let clue = Homophone {
            clue: clue.into(),
            indicator: indicator.to_string(),
            sound_alike: sound_alike.to_string(),
            answer: answer.to_string(),
        };
        let result = clue.validate(config);
        logged("Homophone", &clue.clue, result)?;
        Ok(clue)
    }

    fn validate(&self, config: &CrypticConfig) -> Result<(), Box<CrypticError>> {
        check_format(&self.clue, &self.answer, config)?;
        let parts = IndicatorParts::new().with("sound_alike", self.sound_alike.as_str());
        check_indicator_matches(self.clue.output(), &self.indicator, &parts, config)
    }

    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    #[must_use]
    pub fn sound_alike(&self) -> &str {
        &self.sound_alike
    }
}

macro_rules! impl_clue_type {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl ClueType for $ty {
                fn clue(&self) -> &ClueSource {
                    &self.clue
                }
                fn answer(&self) -> &str {
                    &self.answer
                }
            }

            impl From<$ty> for Clue {
                fn from(c: $ty) -> Self {
                    Clue::$ty(c)
                }
            }
        )+
    };
}

impl_clue_type!(Definition, Anagram, Hidden, Container, Deletion, Reversal, Homophone);

/// Any one of the clue types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clue {
    Definition(Definition),
    Anagram(Anagram),
    Hidden(Hidden),
    Container(Container),
    Deletion(Deletion),
    Reversal(Reversal),
    Homophone(Homophone),
}

impl Clue {
    fn as_clue_type(&self) -> &dyn ClueType {
        match self {
            Clue::Definition(c) => c,
            Clue::Anagram(c) => c,
            Clue::Hidden(c) => c,
            Clue::Container(c) => c,
            Clue::Deletion(c) => c,
            Clue::Reversal(c) => c,
            Clue::Homophone(c) => c,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Clue::Definition(_) => "Definition",
            Clue::Anagram(_) => "Anagram",
            Clue::Hidden(_) => "Hidden",
            Clue::Container(_) => "Container",
            Clue::Deletion(_) => "Deletion",
            Clue::Reversal(_) => "Reversal",
            Clue::Homophone(_) => "Homophone",
        }
    }

    /// The indicator template, for every type that has one.
    #[must_use]
    pub fn indicator(&self) -> Option<&str> {
        match self {
            Clue::Definition(_) => None,
            Clue::Anagram(c) => Some(c.indicator()),
            Clue::Hidden(c) => Some(c.indicator()),
            Clue::Container(c) => Some(c.indicator()),
            Clue::Deletion(c) => Some(c.indicator()),
            Clue::Reversal(c) => Some(c.indicator()),
            Clue::Homophone(c) => Some(c.indicator()),
        }
    }
}

impl ClueType for Clue {
    fn clue(&self) -> &ClueSource {
        self.as_clue_type().clue()
    }
    fn answer(&self) -> &str {
        self.as_clue_type().answer()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(\"{}\" -> {})", self.kind(), self.clue_input(), self.answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue_source::Combination;

    #[test]
    fn test_definition() {
        let def = Definition::new("Chaperone", "ESCORT").unwrap();
        assert_eq!(def.clue_input(), "Chaperone");
        assert_eq!(def.answer(), "ESCORT");
    }

    #[test]
    fn test_definition_rejects_bad_answer() {
        let err = Definition::new("Chaperone", "escort").unwrap_err();
        assert!(matches!(*err, CrypticError::InvalidAnswer { .. }));
        assert!(Definition::new("Chaperone", "").is_err());
    }

    #[test]
    fn test_definition_rejects_stray_delimiter() {
        let err = Definition::new("Chaperone <x>", "ESCORT").unwrap_err();
        assert!(matches!(*err, CrypticError::StrayDelimiter { .. }));
    }

    mod anagram {
        use super::*;

        #[test]
        fn test_valid() {
            let a = Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORT").unwrap();
            assert_eq!(a.fodder(), "corset");
            assert_eq!(a.indicator(), "shredded <fodder>");
        }

        #[test]
        fn test_extra_letter_fails() {
            let err = Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORTS").unwrap_err();
            assert!(matches!(*err, CrypticError::NotAnAnagram { .. }));
            assert_eq!(err.to_string(), "Answer \"ESCORTS\" must be an anagram of \"corset\"");
        }

        #[test]
        fn test_indicator_mismatch_fails() {
            let err = Anagram::new("mangled corset", "shredded <fodder>", "corset", "ESCORT").unwrap_err();
            assert!(matches!(*err, CrypticError::IndicatorMismatch { .. }));
        }

        #[test]
        fn test_multi_word_answer() {
            assert!(Anagram::new("Bad cream ice", "Bad <fodder>", "cream ice", "ICE CREAM").is_ok());
        }

        #[test]
        fn test_format_checked_before_semantics() {
            let err = Anagram::new("shredded corset", "shredded <fodder>", "pickle", "escort").unwrap_err();
            assert!(matches!(*err, CrypticError::InvalidAnswer { .. }));
        }
    }

    mod hidden {
        use super::*;

        #[test]
        fn test_valid() {
            let h = Hidden::new(
                "Found ermine, deer hides",
                "<left><hidden><right> hides",
                Some("Found "),
                "ermine, d",
                "eer",
                "ERMINED",
            )
            .unwrap();
            assert_eq!(h.left(), Some("Found "));
            assert_eq!(h.right(), "eer");
        }

        #[test]
        fn test_without_left_part() {
            let h = Hidden::new("Sample a flask", "<hidden><right>", None, "Samp", "le a flask", "SAMP").unwrap();
            assert_eq!(h.left(), None);
        }

        #[test]
        fn test_wrong_span_fails() {
            let err = Hidden::new(
                "Found ermine, deer hides",
                "<left><hidden><right> hides",
                Some("Found "),
                "ermine, de",
                "er",
                "ERMINED",
            )
            .unwrap_err();
            assert!(matches!(*err, CrypticError::HiddenMismatch { .. }));
        }
    }

    mod container {
        use super::*;

        #[test]
        fn test_valid() {
            let c = Container::new("PAL outside of U", "<outer_left><outer_right> outside of <inner>", "PA", "L", "U", "PAUL").unwrap();
            assert_eq!(c.inner(), "U");
            assert_eq!(c.outer_left(), "PA");
            assert_eq!(c.outer_right(), "L");
        }

        #[test]
        fn test_wrong_split_fails() {
            let err = Container::new("PAL outside of U", "<outer_left><outer_right> outside of <inner>", "P", "AL", "U", "PAUL").unwrap_err();
            assert!(matches!(*err, CrypticError::ContainerMismatch { ref assembled, .. } if assembled == "PUAL"));
        }
    }

    mod deletion {
        use super::*;

        #[test]
        fn test_beheaded() {
            let d = Deletion::new("Beheaded STAR", "Beheaded <delete><keep>", "TAR", "S", None, "TAR").unwrap();
            assert_eq!(d.keep(), &IndicatorPart::from("TAR"));
            assert_eq!(d.deletion(), None);
        }

        #[test]
        fn test_list_keep() {
            let d = Deletion::new(
                "DARLING heartlessly",
                "<keep><delete><keep> heartlessly",
                vec!["DAR", "ING"],
                "L",
                None,
                "DARING",
            )
            .unwrap();
            assert_eq!(d.keep().joined(), "DARING");
        }

        #[test]
        fn test_delete_list_length_mismatch() {
            let err = Deletion::new(
                "DARLING heartlessly",
                "<keep><delete><keep> heartlessly",
                vec!["DAR", "ING"],
                vec!["L", "X"],
                None,
                "DARING",
            )
            .unwrap_err();
            assert!(matches!(*err, CrypticError::PlaceholderCountMismatch { found: 1, expected: 2, .. }));
        }

        #[test]
        fn test_stated_deletion_is_cross_checked() {
            let ok = Deletion::new("STAR without S", "<delete><keep> without <deletion>", "TAR", "S", Some("S"), "TAR");
            assert!(ok.is_ok());
            assert_eq!(ok.unwrap().deletion(), Some("S"));
        }

        #[test]
        fn test_stated_deletion_mismatch() {
            // the indicator matches (the clue really says "T"), but S was deleted
            let err = Deletion::new("STAR without T", "<delete><keep> without <deletion>", "TAR", "S", Some("T"), "TAR")
                .unwrap_err();
            assert!(matches!(*err, CrypticError::DeletionDeleteMismatch { .. }));
        }

        #[test]
        fn test_kept_letters_must_spell_answer() {
            let err = Deletion::new("Beheaded STAR", "Beheaded <delete><keep>", "TAR", "S", None, "RAT").unwrap_err();
            assert!(matches!(*err, CrypticError::DeletionKeepMismatch { .. }));
        }
    }

    mod reversal {
        use super::*;

        #[test]
        fn test_valid() {
            let r = Reversal::new("Returned lager", "Returned <fodder>", "lager", "REGAL").unwrap();
            assert_eq!(r.fodder(), "lager");
        }

        #[test]
        fn test_not_reversed_fails() {
            let err = Reversal::new("Returned lager", "Returned <fodder>", "lager", "LAGER").unwrap_err();
            assert!(matches!(*err, CrypticError::NotAReversal { .. }));
        }

        #[test]
        fn test_single_letter_always_fails() {
            let err = Reversal::new("Returned a", "Returned <fodder>", "a", "A").unwrap_err();
            assert!(matches!(*err, CrypticError::ReversalTooShort { .. }));
        }

        #[test]
        fn test_reversal_of_a_combination() {
            let beer = Definition::new("beer", "LAGER").unwrap();
            let combo = Combination::new("Returned beer", "Returned ", beer.into(), "", "Returned LAGER").unwrap();
            let r = Reversal::new(combo, "Returned <fodder>", "LAGER", "REGAL").unwrap();
            assert_eq!(r.clue_input(), "Returned beer");
            assert_eq!(r.clue_output(), "Returned LAGER");
        }

        #[test]
        fn test_combination_is_matched_on_its_output() {
            let beer = Definition::new("beer", "LAGER").unwrap();
            let combo = Combination::new("Returned beer", "Returned ", beer.into(), "", "Returned LAGER").unwrap();
            // "beer" is surface text only; the indicator sees "Returned LAGER"
            let err = Reversal::new(combo, "Returned <fodder>", "beer", "REEB").unwrap_err();
            assert!(matches!(*err, CrypticError::IndicatorMismatch { .. }));
        }

        #[test]
        fn test_delimiter_in_combination_output_is_rejected() {
            let beer = Definition::new("beer", "LAGER").unwrap();
            // the Combination compares normalized text, so the brackets get through it
            let combo = Combination::new("Returned beer", "Returned ", beer.into(), "", "Returned <LAGER>").unwrap();
            let err = Reversal::new(combo, "Returned <fodder>", "LAGER", "REGAL").unwrap_err();
            assert!(
                matches!(*err, CrypticError::StrayDelimiter { ref clue, delim: '<' } if clue == "Returned <LAGER>"),
                "{err}"
            );
        }
    }

    mod homophone {
        use super::*;

        #[test]
        fn test_valid_without_phonetic_check() {
            let h = Homophone::new("We hear PAIR", "We hear <sound_alike>", "PAIR", "PARE").unwrap();
            assert_eq!(h.sound_alike(), "PAIR");
        }

        #[test]
        fn test_indicator_still_checked() {
            assert!(Homophone::new("We hear PAIR", "They say <sound_alike>", "PAIR", "PARE").is_err());
        }
    }

    #[test]
    fn test_clue_enum_dispatch() {
        let clue: Clue = Anagram::new("shredded corset", "shredded <fodder>", "corset", "ESCORT").unwrap().into();
        assert_eq!(clue.kind(), "Anagram");
        assert_eq!(clue.answer(), "ESCORT");
        assert_eq!(clue.clue_input(), "shredded corset");
        assert_eq!(clue.indicator(), Some("shredded <fodder>"));
        assert_eq!(clue.to_string(), "Anagram(\"shredded corset\" -> ESCORT)");

        let def: Clue = Definition::new("Chaperone", "ESCORT").unwrap().into();
        assert_eq!(def.indicator(), None);
        assert_ne!(clue, def);
    }

    #[test]
    fn test_with_config_uses_custom_delims() {
        let config = CrypticConfig::new(('[', ']'), '|').unwrap();
        assert!(Anagram::with_config(&config, "shredded corset", "shredded [fodder]", "corset", "ESCORT").is_ok());
        // '<' is ordinary text under this config
        assert!(Definition::with_config(&config, "a <b>", "AB").is_ok());
    }
}
