//! Configuration shared by the matcher and validators.
//!
//! A `CrypticConfig` is an ordinary value passed by reference into every
//! function that needs it. Nothing here is global, so differently-configured
//! validations can run side by side (and tests can run in parallel).

use crate::errors::CrypticError;

pub const DEFAULT_INDICATOR_DELIMS: (char, char) = ('<', '>');
pub const DEFAULT_TOKEN_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrypticConfig {
    indicator_delims: (char, char),
    token_separator: char,
}

impl Default for CrypticConfig {
    fn default() -> Self {
        CrypticConfig {
            indicator_delims: DEFAULT_INDICATOR_DELIMS,
            token_separator: DEFAULT_TOKEN_SEPARATOR,
        }
    }
}

impl CrypticConfig {
    /// Build a config, validating the delimiters and separator together.
    pub fn new(indicator_delims: (char, char), token_separator: char) -> Result<Self, Box<CrypticError>> {
        let config = CrypticConfig { indicator_delims, token_separator };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn indicator_delims(&self) -> (char, char) {
        self.indicator_delims
    }

    #[must_use]
    pub fn token_separator(&self) -> char {
        self.token_separator
    }

    /// On error the config is left unchanged.
    pub fn set_indicator_delims(&mut self, delims: (char, char)) -> Result<(), Box<CrypticError>> {
        *self = CrypticConfig::new(delims, self.token_separator)?;
        Ok(())
    }

    /// On error the config is left unchanged.
    pub fn set_token_separator(&mut self, separator: char) -> Result<(), Box<CrypticError>> {
        *self = CrypticConfig::new(self.indicator_delims, separator)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), Box<CrypticError>> {
        let (open, close) = self.indicator_delims;
        let separator = self.token_separator;
        if open == close {
            return Err(invalid(format!("indicator delimiters must differ (got '{open}' twice)")));
        }
        if open.is_alphanumeric() || close.is_alphanumeric() {
            return Err(invalid(format!("indicator delimiters '{open}' '{close}' must not be letters or digits")));
        }
        if separator.is_alphanumeric() || separator.is_whitespace() {
            return Err(invalid(format!("token separator '{separator}' must be punctuation")));
        }
        if separator == open || separator == close {
            return Err(invalid(format!("token separator '{separator}' must differ from the indicator delimiters")));
        }
        Ok(())
    }

    /// Render the placeholder token for `name`, e.g. `<fodder>`.
    #[must_use]
    pub fn placeholder(&self, name: &str) -> String {
        let (open, close) = self.indicator_delims;
        format!("{open}{name}{close}")
    }

    pub(crate) fn is_delimiter(&self, c: char) -> bool {
        c == self.indicator_delims.0 || c == self.indicator_delims.1
    }
}

fn invalid(reason: String) -> Box<CrypticError> {
    Box::new(CrypticError::InvalidConfig { reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrypticConfig::default();
        assert_eq!(config.indicator_delims(), ('<', '>'));
        assert_eq!(config.token_separator(), '|');
        assert_eq!(config.placeholder("fodder"), "<fodder>");
    }

    #[test]
    fn test_custom_delims() {
        let config = CrypticConfig::new(('{', '}'), '/').unwrap();
        assert_eq!(config.placeholder("keep"), "{keep}");
        assert!(config.is_delimiter('{'));
        assert!(!config.is_delimiter('<'));
    }

    #[test]
    fn test_rejects_identical_delims() {
        let err = CrypticConfig::new(('*', '*'), '|').unwrap_err();
        assert!(matches!(*err, CrypticError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_alphanumeric_delims() {
        assert!(CrypticConfig::new(('a', '>'), '|').is_err());
    }

    #[test]
    fn test_rejects_separator_clashing_with_delims() {
        let mut config = CrypticConfig::default();
        assert!(config.set_token_separator('<').is_err());
        assert!(config.set_indicator_delims(('|', '>')).is_err());
        // a failed set leaves the config untouched
        assert_eq!(config, CrypticConfig::default());
    }

    #[test]
    fn test_rejects_letter_or_space_separator() {
        let mut config = CrypticConfig::default();
        assert!(config.set_token_separator('x').is_err());
        assert!(config.set_token_separator(' ').is_err());
        assert!(config.set_token_separator('/').is_ok());
        assert_eq!(config.token_separator(), '/');
    }

    #[test]
    fn test_new_checks_the_final_combination() {
        // '|' is only the default separator, so it is free as a delimiter here
        assert!(CrypticConfig::new(('|', '>'), '/').is_ok());
    }
}
