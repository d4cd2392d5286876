//! Channel-backed rendition of the bounded-buffer contract.
//!
//! A bounded channel of capacity C already is a bounded blocking buffer:
//! `send` blocks when full, `recv` blocks when empty, and FIFO order
//! comes with the channel. This module keeps that rendition alongside the
//! monitor form in [`crate::buffer`] as the second implementation of the
//! same contract.

use crossbeam::channel::{self, Receiver, Sender};

use crate::error::InvalidCapacity;

/// Bounded blocking buffer backed by `crossbeam::channel::bounded`.
///
/// Same put/take contract as [`BoundedBuffer`](crate::BoundedBuffer),
/// minus cancellation: crossbeam signals disconnection by dropping
/// endpoints, which a single owning value cannot stage, so this form only
/// covers the live-buffer contract.
pub struct ChannelBuffer<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    capacity: usize,
}

impl<T> ChannelBuffer<T> {
    /// Creates a buffer holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        let (tx, rx) = channel::bounded(capacity);
        Ok(Self { tx, rx, capacity })
    }

    /// Appends `item` at the tail, blocking while the buffer is full.
    pub fn put(&self, item: T) {
        // Both endpoints live inside self, so the channel cannot be
        // disconnected while the buffer is reachable.
        self.tx.send(item).expect("channel endpoints owned by self");
    }

    /// Removes and returns the oldest item, blocking while the buffer is
    /// empty.
    pub fn take(&self) -> T {
        self.rx.recv().expect("channel endpoints owned by self")
    }

    /// Number of items currently buffered.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rx.is_full()
    }

    /// The fixed capacity the buffer was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(ChannelBuffer::<i32>::new(0).err(), Some(InvalidCapacity));
    }

    #[test]
    fn fifo_order_is_preserved() {
        let buffer = Arc::new(ChannelBuffer::new(4).unwrap());

        let producer = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                for i in 0..100 {
                    buffer.put(i);
                }
            })
        };

        let taken: Vec<i32> = (0..100).map(|_| buffer.take()).collect();
        producer.join().unwrap();

        assert_eq!(taken, (0..100).collect::<Vec<_>>());
        assert!(buffer.is_empty());
    }

    #[test]
    fn put_applies_backpressure_when_full() {
        let buffer = Arc::new(ChannelBuffer::new(2).unwrap());
        buffer.put(1);
        buffer.put(2);
        assert!(buffer.is_full());

        let returned = Arc::new(AtomicBool::new(false));
        let producer = {
            let buffer = Arc::clone(&buffer);
            let returned = Arc::clone(&returned);
            thread::spawn(move || {
                buffer.put(3);
                returned.store(true, Ordering::SeqCst);
            })
        };

        thread::sleep(Duration::from_millis(100));
        assert!(
            !returned.load(Ordering::SeqCst),
            "put returned against a full buffer"
        );

        assert_eq!(buffer.take(), 1);
        producer.join().unwrap();
        assert!(returned.load(Ordering::SeqCst));
    }

    #[test]
    fn multiset_preserved_across_producers() {
        let buffer = Arc::new(ChannelBuffer::new(4).unwrap());

        let producers: Vec<_> = (0..4)
            .map(|p| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    for i in p * 100..(p + 1) * 100 {
                        buffer.put(i);
                    }
                })
            })
            .collect();

        let mut seen: Vec<usize> = (0..400).map(|_| buffer.take()).collect();
        for producer in producers {
            producer.join().unwrap();
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..400).collect::<Vec<_>>());
    }
}
