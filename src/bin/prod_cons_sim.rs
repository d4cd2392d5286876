//! Producer-consumer simulation over one shared bounded buffer.
//!
//! Run with: cargo run --bin prod_cons_sim [producers] [consumers] [capacity]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use bounded_buffer::{actors, BoundedBuffer};

const ITEMS_PER_PRODUCER: usize = 10;

fn arg(n: usize, default: usize) -> usize {
    env::args().nth(n).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    let producers = arg(1, 2);
    let consumers = arg(2, 2).max(1);
    let capacity = arg(3, 5);

    println!("=== Producer-Consumer Simulation ===");
    println!(
        "{} producers, {} consumers, capacity {}\n",
        producers, consumers, capacity
    );

    let buffer = Arc::new(BoundedBuffer::new(capacity).expect("capacity must be at least 1"));
    let total = producers * ITEMS_PER_PRODUCER;

    // Each producer owns a distinct range, so the final tally is easy to
    // eyeball: every value 0..total should appear exactly once.
    let producer_handles: Vec<_> = (0..producers)
        .map(|p| {
            let start = p * ITEMS_PER_PRODUCER;
            actors::spawn_producer(
                Arc::clone(&buffer),
                start..start + ITEMS_PER_PRODUCER,
                Some(Duration::from_millis(10)),
            )
        })
        .collect();

    // Split the total across consumers; the first picks up the remainder.
    let share = total / consumers;
    let consumer_handles: Vec<_> = (0..consumers)
        .map(|c| {
            let quota = if c == 0 { total - share * (consumers - 1) } else { share };
            actors::spawn_consumer(Arc::clone(&buffer), quota, Some(Duration::from_millis(15)))
        })
        .collect();

    for (p, handle) in producer_handles.into_iter().enumerate() {
        println!("producer {} delivered {} items", p, handle.join().unwrap());
    }

    let mut drained = 0;
    for (c, handle) in consumer_handles.into_iter().enumerate() {
        let observed = handle.join().unwrap();
        println!("consumer {} observed {:?}", c, observed);
        drained += observed.len();
    }

    println!(
        "\n{} of {} items drained, {} left in the buffer",
        drained,
        total,
        buffer.len()
    );
}
