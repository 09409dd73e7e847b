use std::fmt::{self, Debug, Formatter};

use parking_lot::Mutex;

/// A value that can only be reached through a closure run under its own mutex.
///
/// Callers serialize through a single blocking acquire. There is no queueing, retrying or fairness
/// beyond what the mutex itself provides, and the guard never escapes the closure.
#[derive(Default)]
pub struct Locked<T> {
    inner: Mutex<T>,
}

impl<T> Locked<T> {
    pub fn new(value: T) -> Locked<T> {
        Locked {
            inner: Mutex::new(value),
        }
    }

    /// Runs `f` with exclusive access to the value.
    pub fn with<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Runs `f` with shared access to the value. The lock is still exclusive.
    pub fn with_ref<R, F: FnOnce(&T) -> R>(&self, f: F) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    /// Like [`Locked::with`], but gives up instead of blocking if the lock is held.
    pub fn try_with<R, F: FnOnce(&mut T) -> R>(&self, f: F) -> Option<R> {
        self.inner.try_lock().map(|mut guard| f(&mut guard))
    }

    /// No locking is needed when the value is uniquely borrowed.
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> From<T> for Locked<T> {
    fn from(value: T) -> Self {
        Locked::new(value)
    }
}

impl<T: Debug> Debug for Locked<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(guard) => f.debug_tuple("Locked").field(&*guard).finish(),
            None => f.debug_tuple("Locked").field(&format_args!("<locked>")).finish(),
        }
    }
}
