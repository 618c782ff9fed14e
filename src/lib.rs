//! Selekta - selection and rotation state machines
//!
//! This crate tracks a current position within a fixed-size ordered sequence,
//! steps through it with wrap-around or clamping at the ends, and notifies
//! listeners on every change. `NamedCycle` projects the same state onto a
//! closed set of string keys.

pub mod config;
pub mod domain;
pub mod ports;

pub use domain::cycle::{NamedCycle, PositionCycle};
pub use domain::foundation::{CycleError, CycleOptions, CyclePolicy, ErrorCode};
pub use ports::{ChangeListener, Listener};
