//! Key patterns for testing and benchmarking the list sort. Each provider
//! returns a `Vec<i32>` of keys in a characteristic shape; callers turn the
//! keys into whatever node type they are sorting. Randomness is drawn from a
//! process-wide fixed seed so failing runs reproduce, see
//! [`random_init_seed`].

use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_dupes(size: usize) -> Vec<i32> {
    // :.:.:.::
    // Few distinct keys, so most comparisons see equal elements and the
    // greater-or-equal partition does the bulk of the work.

    let max_key = ((size as f64).log2().round() as i32).max(1);
    random_uniform(size, 0..=max_key)
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    // Lists shorter than the saw count degenerate to one-element chunks.
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed every provider draws from. Fixed for the lifetime of the
/// process (unless [`disable_fixed_seed`] was called) so that a failing
/// test can print it and be re-run with identical inputs.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
