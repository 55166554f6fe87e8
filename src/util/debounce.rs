//! Trailing-edge debounce over `gloo_timers`.
//!
//! Each call cancels the pending timer and reschedules the callback with the
//! latest value, so a burst of N calls inside the wait window runs the
//! callback exactly once, with the arguments of the last call. There is no
//! leading-edge option and no external cancel handle.

#[cfg(feature = "web")]
use std::cell::RefCell;
#[cfg(feature = "web")]
use std::rc::Rc;

#[cfg(feature = "web")]
use gloo_timers::callback::Timeout;

/// A debounced callback. Cloning shares the pending timer, so clones
/// installed on different event sources still coalesce into one call.
#[cfg(feature = "web")]
pub struct Debounced<T: 'static> {
    wait_ms: u32,
    callback: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

#[cfg(feature = "web")]
impl<T> Debounced<T> {
    /// Wrap `callback` so it only runs after `wait_ms` of call inactivity.
    pub fn new(wait_ms: u32, callback: impl Fn(T) + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule a call with `value`, displacing any pending one.
    pub fn call(&self, value: T) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
        let callback = Rc::clone(&self.callback);
        let slot = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.wait_ms, move || {
            slot.borrow_mut().take();
            callback(value);
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}

#[cfg(feature = "web")]
impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            wait_ms: self.wait_ms,
            callback: Rc::clone(&self.callback),
            pending: Rc::clone(&self.pending),
        }
    }
}
