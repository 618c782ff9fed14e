//! PositionCycle - a current position within a fixed-size ordered range.
//!
//! The position always satisfies `0 <= index < count`. Forward and backward
//! steps either wrap around or stop at the ends, depending on the
//! [`CyclePolicy`] chosen at construction. Listeners are notified
//! synchronously, in subscription order, whenever the position changes.
//!
//! # Usage
//!
//! ```
//! use selekta::domain::cycle::PositionCycle;
//! use selekta::domain::foundation::CycleOptions;
//!
//! let mut cycle = PositionCycle::new(5, CycleOptions::default()).unwrap();
//! assert_eq!(cycle.retreat(), 4);
//! assert_eq!(cycle.advance(), 0);
//! assert_eq!(format!("The current index is: {}", cycle), "The current index is: 0");
//! ```

use std::fmt;

use super::listeners::ListenerRegistry;
use super::notification::{IndexValue, Notification};
use crate::domain::foundation::{CycleError, CycleOptions, CyclePolicy};
use crate::ports::Listener;

/// Index-cycling state machine.
///
/// `N` decides what listeners receive and what `advance`/`retreat` return.
/// With the default [`IndexValue`] that is the index itself.
pub struct PositionCycle<N: Notification = IndexValue> {
    count: usize,
    index: usize,
    policy: CyclePolicy,
    notification: N,
    listeners: ListenerRegistry<N::Value>,
}

impl PositionCycle {
    /// Creates a cycle over `count` positions reporting indices.
    ///
    /// # Errors
    ///
    /// - `EmptySequence` if `count` is zero
    /// - `OutOfRange` if `options.initial_index` is not below `count`
    pub fn new(count: usize, options: CycleOptions) -> Result<Self, CycleError> {
        Self::with_notification(count, options, IndexValue)
    }
}

impl<N: Notification> PositionCycle<N> {
    /// Creates a cycle over `count` positions reporting values computed by `notification`.
    pub fn with_notification(
        count: usize,
        options: CycleOptions,
        notification: N,
    ) -> Result<Self, CycleError> {
        if count == 0 {
            return Err(CycleError::EmptySequence);
        }
        if options.initial_index >= count {
            return Err(CycleError::out_of_range(options.initial_index, count));
        }

        let policy = options.policy();
        tracing::debug!(
            count,
            initial_index = options.initial_index,
            %policy,
            "created position cycle"
        );

        Ok(Self {
            count,
            index: options.initial_index,
            policy,
            notification,
            listeners: ListenerRegistry::new(),
        })
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of positions.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Boundary policy.
    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    /// The notification strategy.
    pub fn notification(&self) -> &N {
        &self.notification
    }

    /// Returns true if the cycle is at the first position.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns true if the cycle is at the last position.
    pub fn is_last(&self) -> bool {
        self.index == self.count - 1
    }

    /// Moves to `index`.
    ///
    /// Setting the current index again does nothing and notifies nobody.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is not below `count`; the position is unchanged.
    pub fn set_index(&mut self, index: usize) -> Result<(), CycleError> {
        if index == self.index {
            return Ok(());
        }
        if index >= self.count {
            tracing::debug!(index, count = self.count, "rejected out of range index");
            return Err(CycleError::out_of_range(index, self.count));
        }
        self.move_to(index);
        Ok(())
    }

    /// Position `advance` would move to. Never mutates.
    pub fn peek_next(&self) -> usize {
        self.policy.step_forward(self.index, self.count)
    }

    /// Position `retreat` would move to. Never mutates.
    pub fn peek_prev(&self) -> usize {
        self.policy.step_backward(self.index, self.count)
    }

    /// Steps forward and returns the new notification value.
    pub fn advance(&mut self) -> N::Value {
        self.move_to(self.peek_next());
        self.current_value()
    }

    /// Alias for [`advance`](Self::advance).
    pub fn toggle(&mut self) -> N::Value {
        self.advance()
    }

    /// Steps backward and returns the new notification value.
    pub fn retreat(&mut self) -> N::Value {
        self.move_to(self.peek_prev());
        self.current_value()
    }

    /// Notification value for the current position.
    pub fn current_value(&self) -> N::Value {
        self.notification.value_at(self.index)
    }

    /// Registers a listener. The same listener may be registered more than once.
    pub fn subscribe(&mut self, listener: Listener<N::Value>) {
        self.listeners.add(listener);
    }

    /// Removes every registration of `listener`. Unknown listeners are ignored.
    pub fn unsubscribe(&mut self, listener: &Listener<N::Value>) {
        self.listeners.remove(listener);
    }

    /// Number of registrations, duplicates included.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if the cycle is at `index`.
    pub fn equals(&self, index: usize) -> bool {
        self.index == index
    }

    // `index` must already be in range.
    fn move_to(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        let from = self.index;
        self.index = index;
        tracing::debug!(
            from,
            to = index,
            listeners = self.listeners.len(),
            "cycle position changed"
        );
        let value = self.current_value();
        self.listeners.notify(&value);
    }
}

impl<N: Notification> PartialEq<usize> for PositionCycle<N> {
    fn eq(&self, other: &usize) -> bool {
        self.equals(*other)
    }
}

impl<N> fmt::Display for PositionCycle<N>
where
    N: Notification,
    N::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_value())
    }
}

impl<N: Notification + fmt::Debug> fmt::Debug for PositionCycle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionCycle")
            .field("count", &self.count)
            .field("index", &self.index)
            .field("policy", &self.policy)
            .field("notification", &self.notification)
            .field("listeners", &self.listeners)
            .finish()
    }
}
