//! Build a max-heap from a random array, draw it as a tree, then heapsort it
//!
//! Run with `RUST_LOG=ordo=trace` to see the structure events.

use ordo::{BinaryMaxHeap, BoundedArray, PriorityQueue, RenderConfig, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut array = BoundedArray::<i32>::new(12)?;
    array.randomize_default(&mut rng);
    println!("Random array: {array}");

    let heap = BinaryMaxHeap::from_array(array);
    println!("Max-heap of height {}:", heap.height());
    println!("{}", heap.render(&RenderConfig::default().with_width(64)));

    let sorted = heap.clone().into_sorted_array();
    println!("Heapsorted: {sorted}");

    let mut queue = PriorityQueue::from_array(heap.into_array());
    queue.increase_key(queue.len(), 99)?;
    println!("After raising the last key to 99, maximum is {}", queue.maximum()?);

    print!("Draining:");
    while let Ok(max) = queue.extract_max() {
        print!(" {max}");
    }
    println!();

    Ok(())
}
