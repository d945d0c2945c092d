//! Long mixed workloads across several lists sharing a tiny pool,
//! cross-checked against independent `Vec` models after every phase.

use coil::{ListPool, PoolConfig};

/// Deterministic pseudo-random stream (same constants as the usual LCG).
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn mixed_workload_against_models() {
    let pool = ListPool::with_config(PoolConfig::new(1));
    let mut lists = vec![pool.list(), pool.list(), pool.list(), pool.list()];
    let mut models: Vec<Vec<u64>> = vec![Vec::new(); 4];
    let mut rng = Lcg(42);

    for step in 0..2_000u64 {
        let which = (rng.next() % 4) as usize;
        let list = &mut lists[which];
        let model = &mut models[which];

        // Mostly inserts, some removals, so the pool keeps growing.
        if rng.next() % 4 != 0 || model.is_empty() {
            let pos = (rng.next() % (model.len() as u64 + 1)) as u32;
            // insert(0, …) on a non-empty list splices at the seam and
            // lands at the back; mirror that in the model.
            let model_pos = if pos == 0 && !model.is_empty() {
                model.len()
            } else {
                pos as usize
            };
            list.insert(pos, step).unwrap();
            model.insert(model_pos, step);
        } else {
            let pos = (rng.next() % model.len() as u64) as u32;
            let got = list.remove(pos).unwrap();
            let want = model.remove(pos as usize);
            assert_eq!(got, want);
        }

        assert_eq!(list.len() as usize, model.len());
    }

    for (list, model) in lists.iter().zip(&models) {
        assert_eq!(&list.to_vec(), model);
    }

    // The books balance: every slot is either in a ring or on the chain.
    let in_rings: u32 = lists.iter().map(|l| l.len()).sum();
    assert_eq!(pool.free_slots() + in_rings, pool.capacity());
}

#[test]
fn growth_snapshot_round_trip() {
    // Record both lists' contents just before a growth step, then confirm
    // the snapshot after.
    let pool = ListPool::with_config(PoolConfig::new(4));
    let mut a = pool.list();
    let mut b = pool.list();

    a.insert(0, 10).unwrap();
    a.insert(1, 11).unwrap();
    b.insert(0, 20).unwrap();
    b.insert(1, 21).unwrap();
    assert_eq!(pool.free_slots(), 0);

    let before = (a.to_vec(), b.to_vec());
    a.insert(2, 12).unwrap(); // triggers growth
    assert_eq!(pool.capacity(), 8);

    assert_eq!(a.to_vec()[..2], before.0[..]);
    assert_eq!(b.to_vec(), before.1);
}

#[test]
fn alternating_clear_and_refill_never_grows_past_need() {
    let pool: ListPool<u32> = ListPool::with_config(PoolConfig::new(8));
    let mut list = pool.list();

    for round in 0..50u32 {
        for i in 0..8 {
            list.insert(i, round * 100 + i).unwrap();
        }
        assert_eq!(list.len(), 8);
        list.clear();
        assert!(list.is_empty());
    }
    // Eight slots were always enough; the O(1) clear recycles them all.
    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.free_slots(), 8);
}
