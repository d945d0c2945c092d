//! Benchmark workloads and utilities for the coil pooled-list workspace.
//!
//! Provides deterministic, seeded workload builders shared by the bench
//! targets:
//!
//! - [`seeded_stream`]: reproducible value stream via ChaCha8
//! - [`append_all`]: fill a list by appending at the back
//! - [`mixed_workload`]: seeded insert/remove mix across several lists

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use coil::{CircularList, ListPool, PoolConfig};
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `n` reproducible values from the given seed.
///
/// Identical seeds produce identical streams, keeping bench comparisons
/// across runs meaningful.
pub fn seeded_stream(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// Append every value to the back of the list.
pub fn append_all(list: &mut CircularList<u64>, values: &[u64]) {
    for &v in values {
        list.insert(list.len(), v)
            .expect("append with default growth policy cannot fail");
    }
}

/// Run a seeded insert-heavy mix (3:1 insert:remove) over `list_count`
/// lists sharing one pool of the given initial capacity.
///
/// Returns the pool so callers can assert on or report final capacity.
pub fn mixed_workload(
    seed: u64,
    steps: usize,
    list_count: usize,
    initial_capacity: u32,
) -> ListPool<u64> {
    let pool = ListPool::with_config(PoolConfig::new(initial_capacity));
    let mut lists: Vec<CircularList<u64>> = (0..list_count).map(|_| pool.list()).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for step in 0..steps as u64 {
        let list = &mut lists[rng.random_range(0..list_count)];
        if rng.random_range(0..4u8) != 0 || list.is_empty() {
            let pos = rng.random_range(0..list.len() + 1);
            list.insert(pos, step)
                .expect("insert with default growth policy cannot fail");
        } else {
            let pos = rng.random_range(0..list.len());
            list.remove(pos).expect("position is within bounds");
        }
    }
    pool
}
