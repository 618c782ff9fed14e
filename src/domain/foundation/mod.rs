//! Foundation module - Shared domain primitives.
//!
//! Contains the policy enum, construction options, and error types
//! that form the vocabulary of the cycle domain.

mod cycle_policy;
mod errors;
mod options;

pub use cycle_policy::CyclePolicy;
pub use errors::{CycleError, ErrorCode};
pub use options::CycleOptions;
