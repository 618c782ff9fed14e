//! Domain layer containing the cycle state machines and their vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (policy, options, errors)
//! - `cycle` - `PositionCycle` and `NamedCycle`

pub mod cycle;
pub mod foundation;
