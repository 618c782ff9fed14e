//! Cycle module - the selection state machines.
//!
//! - `PositionCycle` - index over a fixed-size range with wrap/clamp stepping
//! - `NamedCycle` - the same machine addressed by unique string keys
//! - `Notification` - strategy deciding what listeners are handed
//! - `ListenerRegistry` - ordered, identity-keyed listener list

mod listeners;
mod named_cycle;
mod notification;
mod position_cycle;

pub use listeners::ListenerRegistry;
pub use named_cycle::NamedCycle;
pub use notification::{IndexValue, KeyTable, Notification};
pub use position_cycle::PositionCycle;
