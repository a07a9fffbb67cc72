//! Benchmark workloads for Tether containers.
//!
//! Provides seeded operation sequences that can be replayed against a
//! [`ManagedArray`] and against a plain `Vec<Rc<_>>` baseline:
//!
//! - [`node_pool`]: a pool of distinct shared nodes
//! - [`churn_workload`]: deterministic mix of appends and removals
//! - [`run_managed`] / [`run_vec_baseline`]: replay a workload

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tether_array::ManagedArray;

/// Payload behind each benchmark handle.
#[derive(Debug)]
pub struct Node {
    /// Position in the pool.
    pub id: u32,
}

/// One step of a churn workload.
///
/// Removal positions are raw values reduced modulo the current length
/// at replay time; removals on an empty array are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkOp {
    /// Append the pool node at this index (growing if needed).
    Append(usize),
    /// Order-preserving removal.
    RemoveAt(usize),
    /// Swap removal.
    FastRemoveAt(usize),
    /// Remove the first occurrence of the pool node at this index.
    RemoveObject(usize),
}

/// Build `n` distinct nodes.
pub fn node_pool(n: usize) -> Vec<Rc<Node>> {
    (0..n as u32).map(|id| Rc::new(Node { id })).collect()
}

/// Build a deterministic workload of `len` operations over a pool of
/// `pool_size` nodes. Roughly half the operations are appends, so the
/// array length hovers around a steady state.
pub fn churn_workload(seed: u64, pool_size: usize, len: usize) -> Vec<WorkOp> {
    assert!(pool_size > 0, "pool_size must be non-zero");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let pick = rng.random_range(0..pool_size);
            match rng.random_range(0..8u8) {
                0..=3 => WorkOp::Append(pick),
                4 => WorkOp::RemoveAt(rng.random::<u32>() as usize),
                5 => WorkOp::FastRemoveAt(rng.random::<u32>() as usize),
                _ => WorkOp::RemoveObject(pick),
            }
        })
        .collect()
}

/// Replay `ops` against a fresh [`ManagedArray`].
pub fn run_managed(
    pool: &[Rc<Node>],
    ops: &[WorkOp],
    initial_capacity: usize,
) -> ManagedArray<Rc<Node>> {
    let mut array = ManagedArray::with_capacity(initial_capacity);
    for op in ops {
        match *op {
            WorkOp::Append(i) => array.append_resizing(&pool[i]),
            WorkOp::RemoveAt(raw) if !array.is_empty() => array.remove_at(raw % array.len()),
            WorkOp::FastRemoveAt(raw) if !array.is_empty() => {
                array.fast_remove_at(raw % array.len())
            }
            WorkOp::RemoveObject(i) => {
                array.remove_object(&pool[i]);
            }
            _ => {}
        }
    }
    array
}

/// Replay `ops` against a `Vec`, using pointer identity for lookups.
pub fn run_vec_baseline(pool: &[Rc<Node>], ops: &[WorkOp]) -> Vec<Rc<Node>> {
    let mut vec: Vec<Rc<Node>> = Vec::new();
    for op in ops {
        match *op {
            WorkOp::Append(i) => vec.push(Rc::clone(&pool[i])),
            WorkOp::RemoveAt(raw) if !vec.is_empty() => {
                let idx = raw % vec.len();
                vec.remove(idx);
            }
            WorkOp::FastRemoveAt(raw) if !vec.is_empty() => {
                let idx = raw % vec.len();
                vec.swap_remove(idx);
            }
            WorkOp::RemoveObject(i) => {
                if let Some(pos) = vec.iter().position(|h| Rc::ptr_eq(h, &pool[i])) {
                    vec.remove(pos);
                }
            }
            _ => {}
        }
    }
    vec
}
