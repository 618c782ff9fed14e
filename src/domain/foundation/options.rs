//! Construction options shared by both cycle layers.

use serde::{Deserialize, Serialize};

use super::CyclePolicy;

/// Options accepted when constructing a cycle.
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// map produces the same options as [`CycleOptions::default()`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleOptions {
    /// Wrap around at either end instead of stopping there
    #[serde(default = "default_can_cycle")]
    pub can_cycle: bool,

    /// Starting position
    #[serde(default)]
    pub initial_index: usize,

    /// Compare names case-sensitively in `NamedCycle::equals`
    #[serde(default)]
    pub is_case_sensitive: bool,
}

impl CycleOptions {
    /// Sets whether stepping past an end wraps around.
    pub fn with_can_cycle(mut self, can_cycle: bool) -> Self {
        self.can_cycle = can_cycle;
        self
    }

    /// Sets the starting position.
    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Sets case-sensitive name comparison.
    pub fn case_sensitive(mut self, is_case_sensitive: bool) -> Self {
        self.is_case_sensitive = is_case_sensitive;
        self
    }

    /// Boundary policy selected by `can_cycle`.
    pub fn policy(&self) -> CyclePolicy {
        CyclePolicy::from_can_cycle(self.can_cycle)
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            can_cycle: default_can_cycle(),
            initial_index: 0,
            is_case_sensitive: false,
        }
    }
}

fn default_can_cycle() -> bool {
    true
}
