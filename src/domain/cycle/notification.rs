//! Notification value strategy.
//!
//! A `PositionCycle` only knows indices. The value it hands to listeners and
//! returns from `advance`/`retreat` is computed by a [`Notification`] it owns,
//! which lets a layer built on top report something richer than the index
//! without overriding any of the index arithmetic.

use std::collections::HashSet;

use crate::domain::foundation::CycleError;

/// Computes the value reported for a position.
pub trait Notification {
    /// The reported value.
    type Value;

    /// Value reported when the cycle sits at `index`.
    ///
    /// `index` is always within the cycle's range.
    fn value_at(&self, index: usize) -> Self::Value;
}

/// Reports the index itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexValue;

impl Notification for IndexValue {
    type Value = usize;

    fn value_at(&self, index: usize) -> usize {
        index
    }
}

/// Ordered table of unique keys, reporting the key at each position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    keys: Vec<String>,
}

impl KeyTable {
    /// Builds a table, rejecting empty and duplicate key lists.
    pub fn new(keys: Vec<String>) -> Result<Self, CycleError> {
        if keys.is_empty() {
            return Err(CycleError::EmptySequence);
        }
        let mut seen = HashSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(CycleError::duplicate_key(key.clone()));
            }
        }
        Ok(Self { keys })
    }

    /// All keys in order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at `index`, if in range.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == name)
    }
}

impl Notification for KeyTable {
    type Value = String;

    fn value_at(&self, index: usize) -> String {
        self.keys[index].clone()
    }
}
