//! Route pattern compilation and matching.
//!
//! A pattern like `/:view/:id` is tokenised once into [`Segment`]s and then
//! matched against any number of concrete paths. Matching is all or
//! nothing: segment counts must agree and every literal must be equal.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{PatternError, Result};

/// One `/`-delimited piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must appear verbatim.
    Literal(String),
    /// `:name` capture accepting any non-empty segment.
    Param(String),
}

impl Segment {
    fn classify(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Self::Param(name.to_string()),
            None => Self::Literal(raw.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Param(name) => write!(f, ":{name}"),
        }
    }
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern string.
    ///
    /// Empty segments from leading, trailing or doubled slashes are
    /// dropped. Parameter names must be non-empty and unique.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut segments: Vec<Segment> = Vec::new();

        for raw in split_segments(pattern) {
            let segment = Segment::classify(raw);

            if let Segment::Param(name) = &segment {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                if duplicate {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.clone(),
                    });
                }
            }

            segments.push(segment);
        }

        Ok(Self { segments })
    }

    /// The compiled segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments a matching path must have.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root pattern `/`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of literal segments. Higher means more specific.
    pub fn specificity(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete path, returning captured parameters.
    ///
    /// Returns `None` when the segment counts differ or any literal segment
    /// differs. A pattern without parameters yields empty [`Params`] on a
    /// match, which is distinct from `None`.
    pub fn matches(&self, path: &str) -> Option<Params> {
        if split_segments(path).count() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(split_segments(path)) {
            match segment {
                Segment::Literal(text) if text == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.insert(name.clone(), ParamValue::from_segment(part)),
            }
        }

        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A captured parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Segment written as a canonical decimal integer.
    Int(i64),
    /// Any other segment, verbatim.
    Text(String),
}

impl ParamValue {
    /// Coerce a path segment.
    ///
    /// Only canonical integers become [`ParamValue::Int`]: an optional `-`,
    /// ASCII digits, no leading zeros and within `i64` range. `007`, `-0`,
    /// `+5` and `20.5` stay text, so `to_string()` always reproduces the
    /// original segment.
    pub fn from_segment(segment: &str) -> Self {
        match parse_canonical_int(segment) {
            Some(n) => Self::Int(n),
            None => Self::Text(segment.to_string()),
        }
    }

    /// The integer value, if coerced.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text value, if not coerced.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

fn parse_canonical_int(segment: &str) -> Option<i64> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && segment != "-0";

    if canonical { segment.parse().ok() } else { None }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Parameters captured by a successful match.
///
/// Entries keep pattern declaration order for iteration, but equality and
/// lookup go by name only.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    fn insert(&mut self, name: String, value: ParamValue) {
        self.entries.push((name, value));
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Params {}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::default();
        for (k, v) in iter {
            params.insert(k.into(), v.into());
        }
        params
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
