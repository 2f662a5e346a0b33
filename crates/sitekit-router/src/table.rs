//! Ordered route tables.
//!
//! Navigation tries each declared route in turn and takes the first match.

use std::cmp::Reverse;

use crate::{
    Result,
    pattern::{Params, RoutePattern},
};

/// A compiled pattern and the value it routes to.
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    /// Compiled pattern.
    pub pattern: RoutePattern,
    /// Caller-defined target, e.g. the page to render.
    pub target: T,
}

/// A successful table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, T> {
    /// Pattern that matched.
    pub pattern: &'a RoutePattern,
    /// Target of the matching entry.
    pub target: &'a T,
    /// Captured parameters.
    pub params: Params,
}

/// Routes in match order.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    entries: Vec<RouteEntry<T>>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table from `(pattern, target)` pairs, keeping their order.
    pub fn from_routes<I, S>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (pattern, target) in routes {
            table.push(pattern.as_ref(), target)?;
        }
        Ok(table)
    }

    /// Append a route after all existing ones.
    pub fn push(&mut self, pattern: &str, target: T) -> Result<()> {
        self.entries.push(RouteEntry {
            pattern: RoutePattern::parse(pattern)?,
            target,
        });
        Ok(())
    }

    /// Builder form of [`RouteTable::push`].
    pub fn with_route(mut self, pattern: &str, target: T) -> Result<Self> {
        self.push(pattern, target)?;
        Ok(self)
    }

    /// Reorder so that routes with more literal segments come first.
    ///
    /// The sort is stable: routes of equal specificity keep their declared
    /// order.
    #[must_use]
    pub fn sorted_by_specificity(mut self) -> Self {
        self.entries
            .sort_by_key(|entry| Reverse(entry.pattern.specificity()));
        self
    }

    /// Find the first route matching `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|params| RouteMatch {
                pattern: &entry.pattern,
                target: &entry.target,
                params,
            })
        })
    }

    /// Iterate over the entries in match order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<T>> {
        self.entries.iter()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
