pub mod matcher;
pub mod parts;
pub mod template;

pub use matcher::{check_indicator_matches, indicator_matches, substitute_indicator};
pub use parts::{IndicatorPart, IndicatorParts};
pub use template::{detokenize, parse_template, placeholder_count, placeholder_names, tokenize, TemplateToken};
