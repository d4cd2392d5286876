//! Bounded blocking buffer: a fixed-capacity FIFO queue shared between
//! producer and consumer threads.
//!
//! Producers block while the buffer is full, consumers block while it is
//! empty, with monitor-style signaling in between: one mutex guards the
//! queue, two condition variables wake the two sides, every wait
//! re-checks its condition in a loop, and every state change broadcasts.
//!
//! Two interchangeable renditions of the contract:
//! - [`BoundedBuffer`]: the monitor form (mutex + condition variables).
//! - [`ChannelBuffer`]: the channel form (a bounded channel of capacity
//!   C is the same contract with the blocking built in).
//!
//! The [`actors`] module holds the producer/consumer loop drivers used by
//! the demo binary and the tests.
//!
//! ```
//! use std::sync::Arc;
//! use bounded_buffer::{actors, BoundedBuffer};
//!
//! let buffer = Arc::new(BoundedBuffer::new(3).unwrap());
//! let producer = actors::spawn_producer(Arc::clone(&buffer), 0..5, None);
//! let consumer = actors::spawn_consumer(Arc::clone(&buffer), 5, None);
//!
//! producer.join().unwrap();
//! assert_eq!(consumer.join().unwrap(), vec![0, 1, 2, 3, 4]);
//! ```

pub mod actors;
pub mod buffer;
pub mod channel;
pub mod error;

pub use buffer::BoundedBuffer;
pub use channel::ChannelBuffer;
pub use error::{InvalidCapacity, PutError, TakeError, TryPutError, TryTakeError};
