//! Structural view of indicator templates, and the per-character
//! tokenization transform.
//!
//! A template such as `"<keep><delete><keep> heartlessly"` is a sequence of
//! literal characters and placeholders. [`parse_template`] exposes that
//! sequence; [`tokenize`] renders it one token per character with the
//! configured separator (`"<keep>|<delete>|<keep>| |h|e|..."`), which makes
//! positions in a template easy to line up against positions in a clue.

use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{char as nom_char, satisfy},
    combinator::map,
    sequence::delimited,
};

use crate::config::CrypticConfig;
use crate::errors::CrypticError;

/// Parser result type: input, output, with our custom error
type TResult<'a, O> = IResult<&'a str, O, Box<CrypticError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
    Char(char),
    Placeholder(String),
}

impl TemplateToken {
    /// Render the token back to template text.
    #[must_use]
    pub fn render(&self, config: &CrypticConfig) -> String {
        match self {
            TemplateToken::Char(c) => c.to_string(),
            TemplateToken::Placeholder(name) => config.placeholder(name),
        }
    }
}

fn placeholder_token(input: &str, open: char, close: char, separator: char) -> TResult<'_, TemplateToken> {
    map(
        delimited(
            nom_char(open),
            take_till1(move |c: char| c == open || c == close || c == separator),
            nom_char(close),
        ),
        |name: &str| TemplateToken::Placeholder(name.to_string()),
    )
    .parse(input)
}

fn char_token(input: &str, open: char, close: char) -> TResult<'_, TemplateToken> {
    map(satisfy(move |c| c != open && c != close), TemplateToken::Char).parse(input)
}

fn malformed(template: &str, reason: String) -> Box<CrypticError> {
    Box::new(CrypticError::MalformedTemplate { template: template.to_string(), reason })
}

/// Split `template` into literal characters and placeholders.
///
/// # Errors
/// `MalformedTemplate` for an unclosed placeholder, an empty placeholder
/// name, a name containing the token separator (it could not survive
/// [`tokenize`]), or a closing delimiter with no opening one.
pub fn parse_template(template: &str, config: &CrypticConfig) -> Result<Vec<TemplateToken>, Box<CrypticError>> {
    let (open, close) = config.indicator_delims();
    let separator = config.token_separator();
    let mut rest = template;
    let mut tokens = Vec::new();

    while !rest.is_empty() {
        let (next, token) = if rest.starts_with(open) {
            placeholder_token(rest, open, close, separator).map_err(|_| {
                let after_open = &rest[open.len_utf8()..];
                let name = after_open.split([open, close]).next().unwrap_or_default();
                if after_open.starts_with(close) {
                    malformed(template, "empty placeholder name".to_string())
                } else if name.contains(separator) {
                    malformed(template, format!("placeholder name \"{name}\" contains the token separator '{separator}'"))
                } else {
                    malformed(template, format!("unclosed placeholder starting at \"{rest}\""))
                }
            })?
        } else {
            char_token(rest, open, close)
                .map_err(|_| malformed(template, format!("'{close}' without a matching '{open}'")))?
        };
        tokens.push(token);
        rest = next;
    }

    Ok(tokens)
}

/// Placeholder names in order of first appearance, without duplicates.
pub fn placeholder_names(template: &str, config: &CrypticConfig) -> Result<Vec<String>, Box<CrypticError>> {
    let mut names: Vec<String> = Vec::new();
    for token in parse_template(template, config)? {
        if let TemplateToken::Placeholder(name) = token && !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Number of occurrences of `name`'s placeholder in `template`.
#[must_use]
pub fn placeholder_count(template: &str, name: &str, config: &CrypticConfig) -> usize {
    template.matches(config.placeholder(name).as_str()).count()
}

/// Render `text` one token per character, joined by the token separator,
/// keeping each placeholder as a single token.
///
/// Text that already contains the separator is treated as tokenized: it is
/// validated and returned unchanged, so `tokenize(tokenize(t)) == tokenize(t)`.
///
/// # Errors
/// `MalformedTokens` for badly placed separators; `MalformedTemplate` if
/// the untokenized text has broken placeholders.
///
/// ```
/// use crypilot::config::CrypticConfig;
/// use crypilot::indicator::tokenize;
///
/// let config = CrypticConfig::default();
/// assert_eq!(tokenize("ab<x>", &config).unwrap(), "a|b|<x>");
/// assert_eq!(tokenize("a|b|<x>", &config).unwrap(), "a|b|<x>");
/// assert!(tokenize("a||b", &config).is_err());
/// ```
pub fn tokenize(text: &str, config: &CrypticConfig) -> Result<String, Box<CrypticError>> {
    let separator = config.token_separator();
    if text.contains(separator) {
        split_tokens(text, config)?;
        return Ok(text.to_string());
    }

    let rendered: Vec<String> = parse_template(text, config)?
        .iter()
        .map(|token| token.render(config))
        .collect();
    Ok(rendered.join(&separator.to_string()))
}

/// Inverse of [`tokenize`]: drop the separators.
pub fn detokenize(text: &str, config: &CrypticConfig) -> Result<String, Box<CrypticError>> {
    if !text.contains(config.token_separator()) {
        return Ok(text.to_string());
    }
    Ok(split_tokens(text, config)?
        .iter()
        .map(|token| token.render(config))
        .collect())
}

/// Validate tokenized text, returning its tokens.
fn split_tokens(text: &str, config: &CrypticConfig) -> Result<Vec<TemplateToken>, Box<CrypticError>> {
    let bad = |reason: String| Box::new(CrypticError::MalformedTokens { text: text.to_string(), reason });

    text.split(config.token_separator())
        .enumerate()
        .map(|(i, raw)| {
            if raw.is_empty() {
                return Err(bad(format!("empty token at position {i} (separator at an end, or doubled)")));
            }
            let mut parsed = parse_template(raw, config)
                .map_err(|e| bad(format!("token \"{raw}\" is invalid: {e}")))?;
            if parsed.len() != 1 {
                return Err(bad(format!("token \"{raw}\" is longer than one character and is not a placeholder")));
            }
            Ok(parsed.remove(0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CrypticConfig {
        CrypticConfig::default()
    }

    #[test]
    fn test_parse_template() {
        let tokens = parse_template("<keep> x", &cfg()).unwrap();
        assert_eq!(
            tokens,
            vec![
                TemplateToken::Placeholder("keep".to_string()),
                TemplateToken::Char(' '),
                TemplateToken::Char('x'),
            ]
        );
    }

    #[test]
    fn test_parse_template_without_placeholders() {
        assert!(parse_template("", &cfg()).unwrap().is_empty());
        assert_eq!(parse_template("ab", &cfg()).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_template_unclosed() {
        let err = parse_template("shredded <fodder", &cfg()).unwrap_err();
        assert!(matches!(*err, CrypticError::MalformedTemplate { ref reason, .. } if reason.contains("unclosed")));
        assert!(parse_template("<a<b>", &cfg()).is_err());
    }

    #[test]
    fn test_parse_template_empty_name() {
        let err = parse_template("<>", &cfg()).unwrap_err();
        assert!(matches!(*err, CrypticError::MalformedTemplate { ref reason, .. } if reason == "empty placeholder name"));
    }

    #[test]
    fn test_parse_template_rejects_separator_in_name() {
        let err = parse_template("<a|b>", &cfg()).unwrap_err();
        assert!(
            matches!(*err, CrypticError::MalformedTemplate { ref reason, .. } if reason.contains("token separator")),
            "{err}"
        );
        // outside a placeholder the separator is ordinary text
        assert_eq!(parse_template("a|<b>", &cfg()).unwrap().len(), 3);
        let config = CrypticConfig::new(('<', '>'), '/').unwrap();
        assert!(parse_template("<a|b>", &config).is_ok());
    }

    #[test]
    fn test_parse_template_stray_close() {
        assert!(parse_template("a > b", &cfg()).is_err());
    }

    #[test]
    fn test_placeholder_names_and_counts() {
        let template = "<keep><delete><keep> heartlessly";
        assert_eq!(placeholder_names(template, &cfg()).unwrap(), vec!["keep", "delete"]);
        assert_eq!(placeholder_count(template, "keep", &cfg()), 2);
        assert_eq!(placeholder_count(template, "delete", &cfg()), 1);
        assert_eq!(placeholder_count(template, "deletion", &cfg()), 0);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("<keep> ab", &cfg()).unwrap(), "<keep>| |a|b");
        assert_eq!(tokenize("", &cfg()).unwrap(), "");
        assert_eq!(tokenize("a", &cfg()).unwrap(), "a");
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        for text in ["<left><hidden><right> hides", "DARLING", "x", "<a>", ""] {
            let once = tokenize(text, &cfg()).unwrap();
            assert_eq!(tokenize(&once, &cfg()).unwrap(), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_tokenize_rejects_malformed_separators() {
        for bad in ["|a", "a|", "a||b", "ab|c", "|"] {
            let err = tokenize(bad, &cfg()).unwrap_err();
            assert!(matches!(*err, CrypticError::MalformedTokens { .. }), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_detokenize() {
        let text = "<keep><delete><keep> heartlessly";
        let tokens = tokenize(text, &cfg()).unwrap();
        assert_eq!(detokenize(&tokens, &cfg()).unwrap(), text);
        assert_eq!(detokenize("abc", &cfg()).unwrap(), "abc");
    }

    #[test]
    fn test_tokenize_custom_separator() {
        let config = CrypticConfig::new(('[', ']'), '/').unwrap();
        assert_eq!(tokenize("a[x]", &config).unwrap(), "a/[x]");
        assert!(tokenize("a//b", &config).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokenize_is_idempotent_and_reversible(template in "[a-z ]{0,5}(<[a-z_]{1,6}>[a-z ,]{0,5}){0,3}") {
                let once = tokenize(&template, &cfg()).unwrap();
                prop_assert_eq!(tokenize(&once, &cfg()).unwrap(), once.clone());
                prop_assert_eq!(detokenize(&once, &cfg()).unwrap(), template);
            }
        }
    }
}
