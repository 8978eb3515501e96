use atomic_wait::{wait, wake_one};
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::Relaxed;

use crate::mutex::Guard;

/// Condition variable paired with [`crate::mutex::Mutex`].
///
/// Every notification bumps `counter`. A waiter samples the counter while it
/// still holds the mutex and only sleeps if nothing changed since, so a
/// notify issued after the waiter checked its predicate is never lost.
/// Wake-ups may be spurious; callers re-check their predicate in a loop.
pub struct Condvar {
    counter: AtomicU32,
}

impl Condvar {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU32::new(0),
        }
    }

    pub fn notify_one(&self) {
        self.counter.fetch_add(1, Relaxed);
        wake_one(&self.counter);
    }

    pub fn wait<'a, T>(&self, guard: Guard<'a, T>) -> Guard<'a, T> {
        let value = self.counter.load(Relaxed);

        let lock = guard.lock;
        drop(guard);

        wait(&self.counter, value);

        lock.lock()
    }

    /// Blocks until `condition` returns false, re-checking it after every
    /// wake-up with the lock held.
    pub fn wait_while<'a, T, F>(&self, mut guard: Guard<'a, T>, mut condition: F) -> Guard<'a, T>
    where
        F: FnMut(&mut T) -> bool,
    {
        while condition(&mut *guard) {
            guard = self.wait(guard);
        }
        guard
    }
}

impl Default for Condvar {
    fn default() -> Self {
        Self::new()
    }
}
