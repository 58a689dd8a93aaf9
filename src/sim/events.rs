//! Hit-event observer protocol and shared counters
//!
//! The sole coupling between "a collision happened" and "what that means":
//! blocks own an ordered listener list and dispatch synchronously within
//! the same tick.

use std::cell::Cell;
use std::rc::Rc;

use super::ball::Ball;
use super::block::Block;

/// Observer notified when a block registers a qualifying hit
pub trait HitListener {
    /// `being_hit` is the struck block, `hitter` the ball that struck it
    fn hit_event(&self, being_hit: &Block, hitter: &Ball);
}

/// Shared handle to a registered listener
pub type ListenerHandle = Rc<dyn HitListener>;

/// An obstacle that owns a list of hit listeners
pub trait HitNotifier {
    fn add_hit_listener(&self, listener: ListenerHandle);

    /// Deregister by identity; unknown listeners are a no-op
    fn remove_hit_listener(&self, listener: &dyn HitListener);
}

/// A shared mutable tally (remaining bricks, remaining balls, score).
///
/// Single-threaded tick model: a plain cell behind `Rc`, no atomics.
#[derive(Debug, Default)]
pub struct Counter {
    value: Cell<i32>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increase(&self, amount: i32) {
        self.value.set(self.value.get() + amount);
    }

    pub fn decrease(&self, amount: i32) {
        self.value.set(self.value.get() - amount);
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_arithmetic() {
        let counter = Counter::new();
        assert_eq!(counter.value(), 0);
        counter.increase(5);
        counter.increase(3);
        counter.decrease(1);
        assert_eq!(counter.value(), 7);
        counter.decrease(10);
        assert_eq!(counter.value(), -3);
    }

    #[test]
    fn test_counter_shared_view() {
        let counter = Rc::new(Counter::new());
        let view = Rc::clone(&counter);
        counter.increase(2);
        view.increase(2);
        assert_eq!(counter.value(), 4);
    }
}
