use std::{
    cell::UnsafeCell,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicU32, Ordering},
};

use atomic_wait::{wait, wake_one};

/// Futex-backed mutex guarding the channel's queue.
pub struct Mutex<T> {
    /// 0: unlocked
    /// 1: locked, no other threads waiting
    /// 2: locked, other threads waiting
    state: AtomicU32,
    value: UnsafeCell<T>,
}

unsafe impl<T> Sync for Mutex<T> where T: Send {}

/// Hands out `&T` and `&mut T`, so it is only `Sync` when `T: Sync` and
/// only `Send` when `T: Send`.
pub struct Guard<'a, T> {
    pub(crate) lock: &'a Mutex<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            state: AtomicU32::new(0),
            value: UnsafeCell::new(value),
        }
    }

    pub fn lock(&self) -> Guard<'_, T> {
        if self
            .state
            .compare_exchange(0, 1, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            // Mark as contended so the holder wakes us on unlock.
            while self.state.swap(2, Ordering::Acquire) != 0 {
                wait(&self.state, 2);
            }
        }
        Guard {
            lock: self,
            _marker: PhantomData,
        }
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

// Trait Impls for Guard

impl<T> Deref for Guard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.value.get() }
    }
}

impl<T> DerefMut for Guard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.value.get() }
    }
}

impl<T> Drop for Guard<'_, T> {
    fn drop(&mut self) {
        if self.lock.state.swap(0, Ordering::Release) == 2 {
            wake_one(&self.lock.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, thread, time::Duration};

    use super::*;

    fn assert_sync<T: Sync>() {}
    fn assert_send<T: Send>() {}

    #[test]
    fn lock_is_exclusive() {
        let m = Mutex::new(0u64);

        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..10_000 {
                        *m.lock() += 1;
                    }
                });
            }
        });

        assert_eq!(*m.lock(), 40_000);
    }

    #[test]
    fn contended_waiter_is_woken() {
        let m = Mutex::new(Vec::new());

        thread::scope(|s| {
            let mut held = m.lock();
            let waiter = s.spawn(|| m.lock().push(2));

            thread::sleep(Duration::from_millis(50));
            assert!(!waiter.is_finished());
            held.push(1);
            drop(held);

            waiter.join().unwrap();
        });

        assert_eq!(m.into_inner(), [1, 2]);
    }

    #[test]
    fn guard_is_sync_only_for_sync_values() {
        assert_sync::<Guard<'static, u64>>();
        assert_send::<Guard<'static, Vec<u64>>>();

        // Resolves only if exactly one impl applies, i.e. the guard is not Sync.
        trait AmbiguousIfSync<A> {
            fn check() {}
        }
        impl<T: ?Sized> AmbiguousIfSync<()> for T {}
        impl<T: ?Sized + Sync> AmbiguousIfSync<u8> for T {}

        <Guard<'static, Cell<u64>> as AmbiguousIfSync<_>>::check();
    }

    #[test]
    fn cell_behind_guard_is_updated_by_one_thread_at_a_time() {
        let m = Mutex::new(Cell::new(0u64));

        thread::scope(|s| {
            for _ in 0..2 {
                s.spawn(|| {
                    for _ in 0..50_000 {
                        let g = m.lock();
                        g.set(std::hint::black_box(g.get()) + 1);
                    }
                });
            }
        });

        assert_eq!(m.into_inner().get(), 100_000);
    }
}
