use std::fmt;

/// The value bound to one placeholder name of an indicator template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorPart {
    /// Not present in this clue; its placeholder must be left alone.
    Absent,
    /// Replaces the first occurrence of the placeholder.
    Single(String),
    /// One element per occurrence of the placeholder, left to right.
    Multiple(Vec<String>),
}

impl IndicatorPart {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, IndicatorPart::Absent)
    }

    /// All substrings concatenated in order (`""` when absent).
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            IndicatorPart::Absent => String::new(),
            IndicatorPart::Single(s) => s.clone(),
            IndicatorPart::Multiple(values) => values.concat(),
        }
    }

    /// Apply `f` to every substring, keeping the shape of the part.
    #[must_use]
    pub fn map_strs(&self, f: impl Fn(&str) -> String) -> IndicatorPart {
        match self {
            IndicatorPart::Absent => IndicatorPart::Absent,
            IndicatorPart::Single(s) => IndicatorPart::Single(f(s)),
            IndicatorPart::Multiple(values) => IndicatorPart::Multiple(values.iter().map(|v| f(v)).collect()),
        }
    }
}

impl From<&str> for IndicatorPart {
    fn from(s: &str) -> Self {
        IndicatorPart::Single(s.to_string())
    }
}

impl From<String> for IndicatorPart {
    fn from(s: String) -> Self {
        IndicatorPart::Single(s)
    }
}

impl From<Vec<&str>> for IndicatorPart {
    fn from(values: Vec<&str>) -> Self {
        IndicatorPart::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for IndicatorPart {
    fn from(values: Vec<String>) -> Self {
        IndicatorPart::Multiple(values)
    }
}

impl From<Option<&str>> for IndicatorPart {
    fn from(opt: Option<&str>) -> Self {
        opt.map_or(IndicatorPart::Absent, IndicatorPart::from)
    }
}

impl From<Option<String>> for IndicatorPart {
    fn from(opt: Option<String>) -> Self {
        opt.map_or(IndicatorPart::Absent, IndicatorPart::Single)
    }
}

impl fmt::Display for IndicatorPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndicatorPart::Absent => write!(f, "None"),
            IndicatorPart::Single(s) => write!(f, "{s:?}"),
            IndicatorPart::Multiple(values) => write!(f, "{values:?}"),
        }
    }
}

/// An ordered substitution map: placeholder name -> [`IndicatorPart`].
///
/// Substitution happens in insertion order, which matters when one
/// substituted value could shift what a later placeholder sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorParts {
    parts: Vec<(String, IndicatorPart)>,
}

impl IndicatorParts {
    #[must_use]
    pub fn new() -> Self {
        IndicatorParts::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, part: impl Into<IndicatorPart>) -> Self {
        self.insert(name, part);
        self
    }

    /// Insert or replace; a replaced entry keeps its original position.
    pub fn insert(&mut self, name: &str, part: impl Into<IndicatorPart>) {
        let part = part.into();
        if let Some(slot) = self.parts.iter_mut().find(|(n, _)| n == name) {
            slot.1 = part;
        } else {
            self.parts.push((name.to_string(), part));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndicatorPart> {
        self.parts.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndicatorPart)> {
        self.parts.iter().map(|(n, p)| (n.as_str(), p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<S: Into<String>, P: Into<IndicatorPart>> FromIterator<(S, P)> for IndicatorParts {
    fn from_iter<T: IntoIterator<Item = (S, P)>>(iter: T) -> Self {
        let mut parts = IndicatorParts::new();
        for (name, part) in iter {
            let name: String = name.into();
            parts.insert(&name, part);
        }
        parts
    }
}

impl fmt::Display for IndicatorParts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, part)) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {part}")?;
        }
        write!(f, "}}")
    }
}
