//! Ports - interfaces the domain calls out through.

mod change_listener;

pub use change_listener::{same_listener, ChangeListener, Listener};
