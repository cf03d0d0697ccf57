#![forbid(unsafe_code)]

//! Multicast event publisher.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A subscribed callback. Keep the returned handle to unsubscribe later.
pub type Handler<A> = Rc<dyn Fn(&A)>;

/// Ordered list of handlers invoked synchronously on `publish`.
///
/// `publish` iterates over a snapshot taken when it starts, so a handler may
/// subscribe or unsubscribe (itself included) without affecting the current
/// round.
pub struct EventPublisher<A> {
    handlers: RefCell<Vec<Handler<A>>>,
}

impl<A> Default for EventPublisher<A> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }
}

impl<A> fmt::Debug for EventPublisher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPublisher")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

impl<A> EventPublisher<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` and return its handle.
    pub fn subscribe(&self, handler: impl Fn(&A) + 'static) -> Handler<A> {
        let handler: Handler<A> = Rc::new(handler);
        self.subscribe_handler(handler.clone());
        handler
    }

    /// Append an existing handle. The same handle may be subscribed twice.
    pub fn subscribe_handler(&self, handler: Handler<A>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Remove the first occurrence of `handler`. Returns whether one was found.
    pub fn unsubscribe(&self, handler: &Handler<A>) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|h| Rc::ptr_eq(h, handler)) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Invoke every handler in subscription order.
    pub fn publish(&self, args: &A) {
        let snapshot = self.handlers.borrow().clone();
        for handler in snapshot {
            handler(args);
        }
    }
}
