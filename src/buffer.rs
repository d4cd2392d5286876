//! Monitor-style bounded blocking buffer.
//!
//! A fixed-capacity FIFO queue shared between producer and consumer
//! threads: `put` blocks while the buffer is full, `take` blocks while it
//! is empty. One mutex guards the queue; two condition variables signal
//! the two blocking conditions. Every wait re-checks its condition in a
//! `while` loop after waking, and every state change broadcasts with
//! `notify_all`. An `if` check paired with `notify_one` loses wakeups as
//! soon as several threads block on the same side, so that combination
//! appears nowhere in this module.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::error::{InvalidCapacity, PutError, TakeError, TryPutError, TryTakeError};

/// Shared FIFO buffer with blocking `put`/`take` and a fixed capacity.
///
/// All mutation happens behind one internal `Mutex`; the queue never holds
/// more than `capacity` items. Share it between threads behind an `Arc`.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use bounded_buffer::BoundedBuffer;
///
/// let buffer = Arc::new(BoundedBuffer::new(2).unwrap());
/// let producer = {
///     let buffer = Arc::clone(&buffer);
///     thread::spawn(move || {
///         for i in 0..10 {
///             buffer.put(i).unwrap();
///         }
///     })
/// };
/// for expected in 0..10 {
///     assert_eq!(buffer.take().unwrap(), expected);
/// }
/// producer.join().unwrap();
/// ```
pub struct BoundedBuffer<T> {
    inner: Mutex<Inner<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

struct Inner<T> {
    items: VecDeque<T>,
    cancelled: bool,
}

impl<T> BoundedBuffer<T> {
    /// Creates a buffer holding at most `capacity` items.
    ///
    /// Fails with [`InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        Ok(Self {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity),
                cancelled: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    /// Appends `item` at the tail, blocking while the buffer is full.
    ///
    /// If the buffer is cancelled before a slot opens, the buffer is left
    /// untouched and the item comes back inside the error.
    pub fn put(&self, item: T) -> Result<(), PutError<T>> {
        let mut inner = self.inner.lock().unwrap();
        // Re-check after every wake: the wake may be spurious, or another
        // producer may have claimed the freed slot first.
        while inner.items.len() == self.capacity && !inner.cancelled {
            inner = self.not_full.wait(inner).unwrap();
        }
        if inner.cancelled {
            return Err(PutError(item));
        }
        inner.items.push_back(item);
        self.not_empty.notify_all();
        Ok(())
    }

    /// Removes and returns the oldest item, blocking while the buffer is
    /// empty.
    ///
    /// After [`cancel`](Self::cancel), already-buffered items are still
    /// handed out in order; the error only appears once the buffer has
    /// drained.
    pub fn take(&self) -> Result<T, TakeError> {
        let mut inner = self.inner.lock().unwrap();
        while inner.items.is_empty() && !inner.cancelled {
            inner = self.not_empty.wait(inner).unwrap();
        }
        match inner.items.pop_front() {
            Some(item) => {
                self.not_full.notify_all();
                Ok(item)
            }
            None => Err(TakeError),
        }
    }

    /// Non-blocking `put`: inserts only if a slot is free right now.
    pub fn try_put(&self, item: T) -> Result<(), TryPutError<T>> {
        let mut inner = self.inner.lock().unwrap();
        if inner.cancelled {
            return Err(TryPutError::Cancelled(item));
        }
        if inner.items.len() == self.capacity {
            return Err(TryPutError::Full(item));
        }
        inner.items.push_back(item);
        self.not_empty.notify_all();
        Ok(())
    }

    /// Non-blocking `take`: removes the head only if an item is present.
    pub fn try_take(&self) -> Result<T, TryTakeError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.items.pop_front() {
            Some(item) => {
                self.not_full.notify_all();
                Ok(item)
            }
            None if inner.cancelled => Err(TryTakeError::Cancelled),
            None => Err(TryTakeError::Empty),
        }
    }

    /// Cancels the buffer, waking every blocked caller on both sides.
    ///
    /// Blocked and future `put`s return their item as an error without
    /// mutating the queue; `take` keeps draining what is already buffered
    /// and errors only once empty. Idempotent.
    pub fn cancel(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.cancelled = true;
        // Both sides: a blocked producer must give up, a blocked consumer
        // must notice nothing more is coming.
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.inner.lock().unwrap().cancelled
    }

    /// Number of items currently buffered. A snapshot: another thread may
    /// change it the moment the lock drops.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// The fixed capacity the buffer was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
