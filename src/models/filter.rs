use super::column::Column;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

/// Per-column free-text patterns. An empty pattern means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    patterns: BTreeMap<Column, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: Column, pattern: impl Into<String>) -> Self {
        self.set(column, pattern);
        self
    }

    pub fn set(&mut self, column: Column, pattern: impl Into<String>) {
        self.patterns.insert(column, pattern.into());
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.patterns.get(&column).map(String::as_str)
    }

    /// Entries that actually constrain the view.
    pub fn active(&self) -> impl Iterator<Item = (Column, &str)> {
        self.patterns
            .iter()
            .filter(|(_, p)| !p.is_empty())
            .map(|(c, p)| (*c, p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Builds a filter set from `column=pattern` arguments.
    /// The pattern may itself contain `=`; only the first one splits.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> AppResult<Self> {
        let mut set = FilterSet::new();
        for arg in args {
            let raw = arg.as_ref();
            let (column, pattern) = raw
                .split_once('=')
                .ok_or_else(|| AppError::InvalidFilter(raw.to_string()))?;
            set.set(column.parse()?, pattern);
        }
        Ok(set)
    }
}
