use crate::clue_source::ClueSource;
use crate::indicator::{IndicatorPart, IndicatorParts};

/// A string transform applied uniformly to the pieces of a clue definition,
/// e.g. to uppercase every part before building clues from user input.
#[derive(Debug, Clone, Copy)]
pub struct StringConversion {
    convert: fn(&str) -> String,
}

impl StringConversion {
    #[must_use]
    pub fn new(convert: fn(&str) -> String) -> Self {
        StringConversion { convert }
    }

    #[must_use]
    pub fn convert_clue_str(&self, s: &str) -> String {
        (self.convert)(s)
    }

    #[must_use]
    pub fn convert_answer_str(&self, s: &str) -> String {
        (self.convert)(s)
    }

    #[must_use]
    pub fn convert_answer_pattern_str(&self, s: &str) -> String {
        (self.convert)(s)
    }

    #[must_use]
    pub fn convert_indicator_pattern_str(&self, s: &str) -> String {
        (self.convert)(s)
    }

    /// Plain text is converted; a Combination is already validated and is
    /// returned as is.
    #[must_use]
    pub fn convert_clue_source(&self, source: &ClueSource) -> ClueSource {
        match source {
            ClueSource::Text(s) => ClueSource::Text(self.convert_clue_str(s)),
            ClueSource::Combination(_) => source.clone(),
        }
    }

    #[must_use]
    pub fn convert_indicator_part_str(&self, s: &str) -> String {
        (self.convert)(s)
    }

    #[must_use]
    pub fn convert_indicator_part(&self, part: &IndicatorPart) -> IndicatorPart {
        part.map_strs(|s| self.convert_indicator_part_str(s))
    }

    #[must_use]
    pub fn convert_indicator_parts(&self, parts: &IndicatorParts) -> IndicatorParts {
        parts
            .iter()
            .map(|(name, part)| (name, self.convert_indicator_part(part)))
            .collect()
    }
}
