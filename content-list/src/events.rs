//! Row interaction types.

use std::fmt;
use std::rc::Rc;

/// Result of handling a row interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was not handled, let the host apply its default.
    Ignored,
    /// The interaction was fully handled, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the interaction was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// How a row was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Tap, click or Enter.
    Primary,
    /// Long press.
    Secondary,
}

/// Callback invoked with the entity bound to an activated row.
///
/// Cloning shares the underlying closure.
pub struct ItemListener<T> {
    callback: Rc<dyn Fn(&T)>,
}

impl<T> ItemListener<T> {
    /// Wrap a closure.
    pub fn new(callback: impl Fn(&T) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// A listener that does nothing.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke the callback.
    pub fn call(&self, entity: &T) {
        (self.callback)(entity)
    }
}

impl<T> Clone for ItemListener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> Default for ItemListener<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> fmt::Debug for ItemListener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ItemListener")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_clones_share_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let listener = ItemListener::new(move |n: &i32| counter.set(counter.get() + n));
        let copy = listener.clone();

        listener.call(&2);
        copy.call(&3);
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn test_event_result_is_handled() {
        assert!(EventResult::Consumed.is_handled());
        assert!(!EventResult::Ignored.is_handled());
    }
}
