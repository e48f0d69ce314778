//! Observable value containers

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Box<dyn FnMut(&T)>;

struct SignalInner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

/// A single-threaded observable value
///
/// `set` stores the new value, then synchronously invokes every subscriber
/// with it. Handles are cheap to clone and share one underlying value.
///
/// Subscribers must not call `set` or `subscribe` on the same signal from
/// inside a notification.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Signal {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Signal {
            inner: Rc::new(SignalInner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Run a closure against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Store a new value and notify all subscribers
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;

        let current = self.inner.value.borrow();
        let mut subscribers = self.inner.subscribers.borrow_mut();
        for subscriber in subscribers.iter_mut() {
            subscriber(&*current);
        }
    }

    /// Register a callback invoked after every `set`
    pub fn subscribe(&self, subscriber: impl FnMut(&T) + 'static) {
        self.inner
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }
}

impl<T: Clone> Signal<T> {
    /// Clone of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}
