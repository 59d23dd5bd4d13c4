//! Parameter values and per-frame snapshots
//!
//! Provides [`ParameterValue`] and [`ParameterSet`], the sparse physiological
//! snapshot owned by a single frame.

use serde::{Deserialize, Serialize};
use simlab_catalog::{ParameterCatalog, ParameterCategory, ParameterKey};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// A single parameter value
///
/// Most parameters are numeric; categorical ones (pupils, rhythm, agent)
/// carry a short free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Numeric measurement
    Number(f64),
    /// Free-text observation
    Text(String),
}

impl ParameterValue {
    /// Numeric value, if any
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text value, if any
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// False for NaN and infinite numbers, which JSON cannot carry
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(n) => n.is_finite(),
            Self::Text(_) => true,
        }
    }
}

impl Display for ParameterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ParameterValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for ParameterValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Sparse snapshot of parameter values attached to one frame
///
/// A missing key means "not specified for this frame", which is distinct
/// from a value of zero. Iteration follows catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<ParameterKey, ParameterValue>,
}

impl ParameterSet {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a key
    #[inline]
    #[must_use]
    pub fn get(&self, key: ParameterKey) -> Option<&ParameterValue> {
        self.values.get(&key)
    }

    /// Whether the key is specified
    #[inline]
    #[must_use]
    pub fn contains(&self, key: ParameterKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Set a key, returning the previous value
    pub fn set(&mut self, key: ParameterKey, value: impl Into<ParameterValue>) -> Option<ParameterValue> {
        self.values.insert(key, value.into())
    }

    /// Remove a key, returning the previous value
    pub fn clear(&mut self, key: ParameterKey) -> Option<ParameterValue> {
        self.values.remove(&key)
    }

    /// Set or clear a key
    ///
    /// `None` is the cleared sentinel: the key is removed rather than stored
    /// with an empty value.
    pub fn apply(&mut self, key: ParameterKey, value: Option<ParameterValue>) {
        match value {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    /// Number of specified keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is specified
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, &ParameterValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate the values of one category
    pub fn in_category(
        &self,
        category: ParameterCategory,
    ) -> impl Iterator<Item = (ParameterKey, &ParameterValue)> {
        self.iter().filter(move |(k, _)| k.category() == category)
    }

    /// Rendered `(label, "value unit")` pairs for display
    #[must_use]
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(k, v)| (ParameterCatalog::label_of(k), ParameterCatalog::format_value(k, v)))
            .collect()
    }
}

impl FromIterator<(ParameterKey, ParameterValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParameterKey, ParameterValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
