//! ChangeListener port - Interface for observing cycle changes.
//!
//! A cycle notifies its listeners synchronously, in subscription order,
//! every time its position actually changes.

use std::rc::Rc;

/// Receives the notification value of a cycle after each change.
///
/// The value is the index for a plain `PositionCycle` and the current
/// name for a `NamedCycle`.
///
/// Any `Fn(&V)` closure is a listener:
///
/// ```
/// use std::rc::Rc;
/// use selekta::ports::Listener;
///
/// let listener: Listener<usize> = Rc::new(|index: &usize| println!("now at {index}"));
/// ```
pub trait ChangeListener<V> {
    /// Called once per change with the new notification value.
    fn on_change(&self, value: &V);

    /// Listener name for logging.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<V, F> ChangeListener<V> for F
where
    F: Fn(&V),
{
    fn on_change(&self, value: &V) {
        self(value)
    }
}

/// Shared handle to a listener.
///
/// Identity is the address of the shared allocation: clones of one handle
/// are the same listener, two separately created handles never are.
pub type Listener<V> = Rc<dyn ChangeListener<V>>;

/// Returns true if both handles point at the same listener.
pub fn same_listener<V>(a: &Listener<V>, b: &Listener<V>) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}
