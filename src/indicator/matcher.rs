use log::{debug, trace};

use crate::config::CrypticConfig;
use crate::errors::CrypticError;
use crate::strings::equals_normalized;

use super::parts::{IndicatorPart, IndicatorParts};

/// Substitute every part into `indicator`, in the order of `parts`.
///
/// - `Absent` parts are skipped; their placeholder stays in the template.
/// - `Single` parts replace the first occurrence of their placeholder, which
///   must exist.
/// - `Multiple` parts must supply exactly one value per occurrence of their
///   placeholder; occurrences are replaced left to right.
///
/// Placeholders with no entry in `parts` are left untouched.
///
/// # Errors
/// - `PlaceholderNotFound` if a single part's placeholder is missing.
/// - `PlaceholderCountMismatch` if a list part's length differs from the
///   number of occurrences of its placeholder.
///
/// ```
/// use crypilot::config::CrypticConfig;
/// use crypilot::indicator::{substitute_indicator, IndicatorParts};
///
/// let parts = IndicatorParts::new().with("fodder", "corset");
/// let clue = substitute_indicator("shredded <fodder>", &parts, &CrypticConfig::default()).unwrap();
/// assert_eq!(clue, "shredded corset");
/// ```
pub fn substitute_indicator(
    indicator: &str,
    parts: &IndicatorParts,
    config: &CrypticConfig,
) -> Result<String, Box<CrypticError>> {
    let mut replaced = indicator.to_string();

    for (name, part) in parts.iter() {
        let placeholder = config.placeholder(name);
        match part {
            IndicatorPart::Absent => {
                trace!("skipping absent part {placeholder}");
            }
            IndicatorPart::Single(value) => {
                if !replaced.contains(placeholder.as_str()) {
                    return Err(Box::new(CrypticError::PlaceholderNotFound {
                        placeholder,
                        indicator: indicator.to_string(),
                    }));
                }
                replaced = replaced.replacen(placeholder.as_str(), value, 1);
                trace!("{placeholder} -> {value:?}: {replaced:?}");
            }
            IndicatorPart::Multiple(values) => {
                let pieces: Vec<&str> = replaced.split(placeholder.as_str()).collect();
                let found = pieces.len() - 1;
                if found != values.len() {
                    return Err(Box::new(CrypticError::PlaceholderCountMismatch {
                        placeholder,
                        found,
                        expected: values.len(),
                    }));
                }
                // interleave so inserted values are never themselves re-scanned
                let mut rebuilt = String::with_capacity(replaced.len());
                for (piece, value) in pieces.iter().zip(values.iter().map(String::as_str).chain([""])) {
                    rebuilt.push_str(piece);
                    rebuilt.push_str(value);
                }
                replaced = rebuilt;
                trace!("{placeholder} -> {values:?}: {replaced:?}");
            }
        }
    }

    Ok(replaced)
}

/// Check that `indicator` with `parts` substituted reproduces `clue`
/// (compared in normalized form).
///
/// # Errors
/// Template errors from [`substitute_indicator`], or `IndicatorMismatch`
/// carrying the clue, template, parts and substituted template.
pub fn check_indicator_matches(
    clue: &str,
    indicator: &str,
    parts: &IndicatorParts,
    config: &CrypticConfig,
) -> Result<(), Box<CrypticError>> {
    let substituted = substitute_indicator(indicator, parts, config)?;
    if equals_normalized(&substituted, clue) {
        return Ok(());
    }

    debug!("indicator {indicator:?} with {parts} gave {substituted:?}, expected {clue:?}");
    Err(Box::new(CrypticError::IndicatorMismatch {
        clue: clue.to_string(),
        indicator: indicator.to_string(),
        parts: parts.to_string(),
        substituted,
    }))
}

/// Predicate form of [`check_indicator_matches`].
///
/// Returns `Ok(false)` exactly when the check would fail with
/// `IndicatorMismatch`. Template errors are still errors, since they mean
/// the decomposition itself is malformed.
pub fn indicator_matches(
    clue: &str,
    indicator: &str,
    parts: &IndicatorParts,
    config: &CrypticConfig,
) -> Result<bool, Box<CrypticError>> {
    match check_indicator_matches(clue, indicator, parts, config) {
        Ok(()) => Ok(true),
        Err(e) if matches!(*e, CrypticError::IndicatorMismatch { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}
