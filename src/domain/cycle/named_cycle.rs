//! NamedCycle - a position cycle addressed by a closed set of string keys.
//!
//! Wraps a [`PositionCycle`] whose notification strategy is a [`KeyTable`],
//! so listeners and the stepping methods report the current key instead of
//! the index. All index arithmetic stays in the wrapped cycle.
//!
//! # Usage
//!
//! ```
//! use selekta::domain::cycle::NamedCycle;
//! use selekta::domain::foundation::CycleOptions;
//!
//! let mut status = NamedCycle::new(
//!     ["NOT_STARTED", "IN_PROGRESS", "COMPLETE"],
//!     CycleOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(status.advance(), "IN_PROGRESS");
//! assert!(status.is_current("IN_PROGRESS"));
//! assert_eq!(format!("The current status is: {}", status), "The current status is: IN_PROGRESS");
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::notification::KeyTable;
use super::position_cycle::PositionCycle;
use crate::domain::foundation::{CycleError, CycleOptions};
use crate::ports::Listener;

/// Enumeration-style cycle over unique string keys.
#[derive(Debug)]
pub struct NamedCycle {
    core: PositionCycle<KeyTable>,
    enum_map: HashMap<String, String>,
    options: CycleOptions,
}

impl NamedCycle {
    /// Creates a cycle over `keys`, positioned at `options.initial_index`.
    ///
    /// # Errors
    ///
    /// - `EmptySequence` if `keys` is empty
    /// - `DuplicateKey` if a key repeats
    /// - `OutOfRange` if `options.initial_index` is not below the key count
    pub fn new<I, S>(keys: I, options: CycleOptions) -> Result<Self, CycleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let table = KeyTable::new(keys)?;
        let enum_map = table
            .keys()
            .iter()
            .map(|k| (k.clone(), k.clone()))
            .collect();
        let core = PositionCycle::with_notification(table.len(), options.clone(), table)?;

        Ok(Self {
            core,
            enum_map,
            options,
        })
    }

    /// Creates a cycle from dynamically typed keys, such as a parsed JSON array.
    ///
    /// # Errors
    ///
    /// `InvalidKeyType` for the first key that is not a string, before any
    /// other validation. Otherwise as [`NamedCycle::new`].
    pub fn from_values(values: &[Value], options: CycleOptions) -> Result<Self, CycleError> {
        let keys = values
            .iter()
            .enumerate()
            .map(|(position, value)| match value {
                Value::String(key) => Ok(key.clone()),
                other => Err(CycleError::invalid_key_type(position, json_type_name(other))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keys, options)
    }

    /// Current key.
    pub fn value(&self) -> &str {
        &self.keys()[self.core.index()]
    }

    /// Moves to the position of `name`.
    ///
    /// # Errors
    ///
    /// `UnknownName` if `name` is not one of the keys; the position is unchanged.
    pub fn set_value(&mut self, name: &str) -> Result<(), CycleError> {
        match self.core.notification().position(name) {
            Some(index) => self.core.set_index(index),
            None => {
                tracing::debug!(name, "rejected unknown name");
                Err(CycleError::unknown_name(name))
            }
        }
    }

    /// Key `advance` would move to.
    pub fn next_name(&self) -> &str {
        &self.keys()[self.core.peek_next()]
    }

    /// Key `retreat` would move to.
    pub fn prev_name(&self) -> &str {
        &self.keys()[self.core.peek_prev()]
    }

    /// Steps forward and returns the new key.
    pub fn advance(&mut self) -> String {
        self.core.advance()
    }

    /// Alias for [`advance`](Self::advance).
    pub fn toggle(&mut self) -> String {
        self.core.toggle()
    }

    /// Steps backward and returns the new key.
    pub fn retreat(&mut self) -> String {
        self.core.retreat()
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.core.index()
    }

    /// Moves by position; listeners still receive the key.
    pub fn set_index(&mut self, index: usize) -> Result<(), CycleError> {
        self.core.set_index(index)
    }

    /// Number of keys.
    pub fn count(&self) -> usize {
        self.core.count()
    }

    /// All keys in order.
    pub fn keys(&self) -> &[String] {
        self.core.notification().keys()
    }

    /// Returns true if `key` is the current key. Unknown keys are never current.
    pub fn is_current(&self, key: &str) -> bool {
        self.value() == key
    }

    /// Every key paired with whether it is current, in key order.
    ///
    /// Exactly one entry is `true`.
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        let current = self.core.index();
        self.keys()
            .iter()
            .enumerate()
            .map(move |(i, k)| (k.as_str(), i == current))
    }

    /// Identity map from each key to itself.
    pub fn enum_map(&self) -> &HashMap<String, String> {
        &self.enum_map
    }

    /// Looks up a key literal in the enumeration map.
    pub fn enum_key(&self, name: &str) -> Option<&str> {
        self.enum_map.get(name).map(String::as_str)
    }

    /// Options the cycle was built with, `is_case_sensitive` resolved.
    pub fn options(&self) -> &CycleOptions {
        &self.options
    }

    /// Compares `name` with the current key, ignoring case unless configured otherwise.
    pub fn equals(&self, name: &str) -> bool {
        if self.options.is_case_sensitive {
            name == self.value()
        } else {
            name.to_lowercase() == self.value().to_lowercase()
        }
    }

    /// Registers a listener receiving the new key on every change.
    pub fn subscribe(&mut self, listener: Listener<String>) {
        self.core.subscribe(listener);
    }

    /// Removes every registration of `listener`.
    pub fn unsubscribe(&mut self, listener: &Listener<String>) {
        self.core.unsubscribe(listener);
    }

    /// Number of registrations, duplicates included.
    pub fn listener_count(&self) -> usize {
        self.core.listener_count()
    }
}

impl PartialEq<str> for NamedCycle {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for NamedCycle {
    fn eq(&self, other: &&str) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for NamedCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ON_OFF: [&str; 2] = ["OFF", "ON"];
    const STATUSES: [&str; 3] = ["NOT_STARTED", "IN_PROGRESS", "COMPLETE"];
    const ONE_TO_FIVE: [&str; 5] = ["one", "two", "three", "four", "five"];

    fn named(keys: &[&str]) -> NamedCycle {
        NamedCycle::new(keys.iter().copied(), CycleOptions::default()).unwrap()
    }

    fn named_with(keys: &[&str], options: CycleOptions) -> NamedCycle {
        NamedCycle::new(keys.iter().copied(), options).unwrap()
    }

    // === Construction ===

    #[test]
    fn starts_on_the_first_key() {
        let switcher = named(&ON_OFF);
        assert_eq!(switcher.value(), "OFF");
        assert!(switcher.is_current("OFF"));
        assert!(!switcher.is_current("ON"));
    }

    #[test]
    fn maps_keys_to_the_enum_map() {
        let selekta = named(&ON_OFF);
        assert_eq!(selekta.enum_key("OFF"), Some("OFF"));
        assert_eq!(selekta.enum_key("ON"), Some("ON"));
        assert_eq!(selekta.enum_key("DIM"), None);
        assert_eq!(selekta.enum_map().len(), 2);
    }

    #[test]
    fn from_values_rejects_non_string_keys() {
        let result = NamedCycle::from_values(
            &[json!("one"), json!("two"), json!(3)],
            CycleOptions::default(),
        );
        assert_eq!(result.unwrap_err(), CycleError::invalid_key_type(2, "number"));
    }

    #[test]
    fn from_values_accepts_string_keys() {
        let selekta =
            NamedCycle::from_values(&[json!("light"), json!("dark")], CycleOptions::default())
                .unwrap();
        assert_eq!(selekta.keys(), &["light".to_string(), "dark".to_string()]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = NamedCycle::new(["a", "b", "a"], CycleOptions::default());
        assert!(matches!(result, Err(CycleError::DuplicateKey { .. })));
    }

    #[test]
    fn rejects_empty_keys() {
        let result = NamedCycle::new(Vec::<String>::new(), CycleOptions::default());
        assert!(matches!(result, Err(CycleError::EmptySequence)));
    }

    #[test]
    fn options_resolve_case_sensitivity() {
        assert!(!named(&ON_OFF).options().is_case_sensitive);
        let selekta = named_with(&ON_OFF, CycleOptions::default().case_sensitive(true));
        assert!(selekta.options().is_case_sensitive);
    }

    // === set_value ===

    #[test]
    fn set_value_moves_to_the_named_key() {
        let mut selekta = named(&ON_OFF);
        selekta.set_value("ON").unwrap();
        assert_eq!(selekta.value(), "ON");
        assert!(selekta.is_current("ON"));
    }

    #[test]
    fn set_value_rejects_unknown_names() {
        let mut selekta = named(&ONE_TO_FIVE);
        let result = selekta.set_value("six");
        assert_eq!(result, Err(CycleError::unknown_name("six")));
        assert_eq!(selekta.value(), "one");
    }

    // === Peeking ===

    #[test]
    fn next_and_prev_names_surround_the_current_key() {
        let selekta = named_with(&ONE_TO_FIVE, CycleOptions::default().with_initial_index(2));
        assert_eq!(selekta.next_name(), "four");
        assert_eq!(selekta.prev_name(), "two");
        assert_eq!(selekta.value(), "three");
    }

    // === Stepping ===

    #[test]
    fn toggle_switches_between_two_keys() {
        let mut switcher = named(&ON_OFF);
        assert_eq!(switcher.toggle(), "ON");
        assert!(!switcher.is_current("OFF"));
        assert!(switcher.is_current("ON"));
    }

    #[test]
    fn advance_cycles_back_to_the_first_key() {
        let mut status = named(&STATUSES);
        status.advance();
        status.advance();
        status.advance();
        assert_eq!(status.value(), "NOT_STARTED");
    }

    #[test]
    fn advance_stays_on_the_last_key_when_clamped() {
        let mut status = named_with(&STATUSES, CycleOptions::default().with_can_cycle(false));
        status.advance();
        status.advance();
        status.advance();
        assert_eq!(status.value(), "COMPLETE");
        assert!(!status.is_current("NOT_STARTED"));
    }

    #[test]
    fn retreat_cycles_back_to_the_last_key() {
        let mut counter = named(&ONE_TO_FIVE);
        assert_eq!(counter.retreat(), "five");
    }

    #[test]
    fn retreat_stays_on_the_first_key_when_clamped() {
        let mut status = named_with(&STATUSES, CycleOptions::default().with_can_cycle(false));
        status.retreat();
        status.retreat();
        assert_eq!(status.value(), "NOT_STARTED");
    }

    #[test]
    fn flags_mark_only_the_current_key() {
        let mut counter = named(&ONE_TO_FIVE);
        counter.advance();
        counter.advance();
        counter.advance();

        let current: Vec<&str> = counter.flags().filter(|(_, on)| *on).map(|(k, _)| k).collect();
        assert_eq!(current, vec!["four"]);
        assert_eq!(counter.flags().count(), 5);
    }

    // === Equality and rendering ===

    #[test]
    fn equals_ignores_case_by_default() {
        let values = named(&["five", "six"]);
        assert!(values.equals("five"));
        assert!(values.equals("FIVE"));
        assert!(!values.equals("six"));
    }

    #[test]
    fn equals_respects_case_when_configured() {
        let values = named_with(&["seven", "eight"], CycleOptions::default().case_sensitive(true));
        assert!(values.equals("seven"));
        assert!(!values.equals("SEVEN"));
    }

    #[test]
    fn partial_eq_uses_equals() {
        let values = named(&["one", "two"]);
        assert!(values == "ONE");
        assert!(values != "two");
    }

    #[test]
    fn display_renders_the_current_key() {
        let status = named(&STATUSES);
        assert_eq!(status.to_string(), "NOT_STARTED");
        assert_eq!(
            format!("The current status is: {}", status),
            "The current status is: NOT_STARTED"
        );
    }

    // === Listeners ===

    #[test]
    fn listeners_receive_the_new_key() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut status = named(&STATUSES);
        status.subscribe(Rc::new(move |name: &String| sink.borrow_mut().push(name.clone())));

        status.advance();
        status.set_value("COMPLETE").unwrap();
        status.set_index(0).unwrap();

        assert_eq!(*log.borrow(), vec!["IN_PROGRESS", "COMPLETE", "NOT_STARTED"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut status = named(&STATUSES);
        let listener: Listener<String> =
            Rc::new(move |name: &String| sink.borrow_mut().push(name.clone()));
        status.subscribe(Rc::clone(&listener));
        status.unsubscribe(&listener);

        status.advance();

        assert!(log.borrow().is_empty());
        assert_eq!(status.listener_count(), 0);
    }
}
