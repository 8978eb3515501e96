use std::collections::VecDeque;

use crate::{condvar::Condvar, mutex::Mutex};

/// Unbounded FIFO hand-off between one producer and one consumer.
///
/// Every access to the queue goes through the mutex. `pop` blocks until an
/// item is available; `is_empty`, `len` and `try_pop` never wait on the
/// other side.
pub struct Channel<T> {
    queue: Mutex<VecDeque<T>>,
    item_ready: Condvar,
}

impl<T> Channel<T> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            item_ready: Condvar::new(),
        }
    }

    pub fn push(&self, item: T) {
        self.queue.lock().push_back(item);
        self.item_ready.notify_one();
    }

    pub fn pop(&self) -> T {
        let mut queue = self
            .item_ready
            .wait_while(self.queue.lock(), |queue| queue.is_empty());
        match queue.pop_front() {
            Some(item) => item,
            None => unreachable!("woke with an empty queue"),
        }
    }

    pub fn try_pop(&self) -> Option<T> {
        self.queue.lock().pop_front()
    }

    /// Advisory: may be stale as soon as it returns. With a single consumer,
    /// `false` means the next `pop` will not block.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}
