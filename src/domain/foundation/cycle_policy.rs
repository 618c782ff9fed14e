//! CyclePolicy enum describing what happens at the ends of a sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boundary behaviour when stepping past either end of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Stepping past the last position lands on the first, and vice versa.
    #[default]
    Wrap,
    /// Stepping past either end stays on that end.
    Clamp,
}

impl CyclePolicy {
    /// Maps the `can_cycle` option onto a policy.
    pub fn from_can_cycle(can_cycle: bool) -> Self {
        if can_cycle {
            CyclePolicy::Wrap
        } else {
            CyclePolicy::Clamp
        }
    }

    /// Returns true if stepping past an end wraps around.
    pub fn wraps(&self) -> bool {
        matches!(self, CyclePolicy::Wrap)
    }

    /// Position after `index` in a range of `count` positions.
    ///
    /// `count` must be non-zero and `index` below it.
    pub(crate) fn step_forward(&self, index: usize, count: usize) -> usize {
        let last = count - 1;
        match self {
            CyclePolicy::Clamp if index >= last => last,
            CyclePolicy::Wrap if index >= last => 0,
            _ => index + 1,
        }
    }

    /// Position before `index` in a range of `count` positions.
    ///
    /// `count` must be non-zero and `index` below it.
    pub(crate) fn step_backward(&self, index: usize, count: usize) -> usize {
        match self {
            CyclePolicy::Clamp if index == 0 => 0,
            CyclePolicy::Wrap if index == 0 => count - 1,
            _ => index - 1,
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CyclePolicy::Wrap => "Wrap",
            CyclePolicy::Clamp => "Clamp",
        };
        write!(f, "{}", s)
    }
}
