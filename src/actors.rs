//! Producer and consumer loop drivers.
//!
//! The buffer arbitrates *when* a call may proceed; these are the trivial
//! callers that drive it. A producer feeds a sequence of items through
//! `put`, a consumer drains a count of items through `take`, and both
//! leave their loop gracefully the moment the buffer is cancelled.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::buffer::BoundedBuffer;

/// Spawns a producer thread feeding `items` into the buffer in order.
///
/// Stops at the first cancelled `put`; the handle yields how many items
/// made it in. `pace` adds a sleep between puts, for demo pacing.
pub fn spawn_producer<T, I>(
    buffer: Arc<BoundedBuffer<T>>,
    items: I,
    pace: Option<Duration>,
) -> JoinHandle<usize>
where
    T: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
{
    thread::spawn(move || {
        let mut delivered = 0;
        for item in items {
            if buffer.put(item).is_err() {
                // Cancelled while waiting: leave the loop, report what
                // was delivered so far.
                break;
            }
            delivered += 1;
            if let Some(pace) = pace {
                thread::sleep(pace);
            }
        }
        delivered
    })
}

/// Spawns a consumer thread draining up to `count` items.
///
/// Stops early once the buffer is cancelled and drained; the handle
/// yields the items observed, in observation order.
pub fn spawn_consumer<T>(
    buffer: Arc<BoundedBuffer<T>>,
    count: usize,
    pace: Option<Duration>,
) -> JoinHandle<Vec<T>>
where
    T: Send + 'static,
{
    thread::spawn(move || {
        let mut observed = Vec::with_capacity(count);
        for _ in 0..count {
            match buffer.take() {
                Ok(item) => observed.push(item),
                Err(_) => break,
            }
            if let Some(pace) = pace {
                thread::sleep(pace);
            }
        }
        observed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn producer_and_consumer_round_trip() {
        let buffer = Arc::new(BoundedBuffer::new(3).unwrap());
        let producer = spawn_producer(Arc::clone(&buffer), 0..50, None);
        let consumer = spawn_consumer(Arc::clone(&buffer), 50, None);

        assert_eq!(producer.join().unwrap(), 50);
        assert_eq!(consumer.join().unwrap(), (0..50).collect::<Vec<_>>());
        assert!(buffer.is_empty());
    }

    #[test]
    fn consumer_exits_gracefully_on_cancel() {
        let buffer = Arc::new(BoundedBuffer::new(2).unwrap());
        // The consumer wants more items than will ever arrive.
        let consumer = spawn_consumer(Arc::clone(&buffer), 10, None);
        let producer = spawn_producer(Arc::clone(&buffer), 0..3, None);

        thread::sleep(Duration::from_millis(100));
        buffer.cancel();

        assert_eq!(producer.join().unwrap(), 3);
        assert_eq!(consumer.join().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn blocked_producer_reports_partial_delivery() {
        let buffer = Arc::new(BoundedBuffer::new(2).unwrap());
        // Fills both slots, then blocks on the third item.
        let producer = spawn_producer(Arc::clone(&buffer), 0..10, None);

        thread::sleep(Duration::from_millis(100));
        buffer.cancel();

        assert_eq!(producer.join().unwrap(), 2);
        assert_eq!(buffer.len(), 2);
    }
}
