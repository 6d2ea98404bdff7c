// Draw randomness - injected index source so the ledger never depends on
// a non-reproducible entropy source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of draw randomness. `next_index` must return a value in
/// `0..bound`; `bound` is always non-zero when the ledger calls it.
pub trait DrawRng {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production source backed by the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngDraw;

impl DrawRng for ThreadRngDraw {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source for tests and reproducible demo draws
#[derive(Clone, Debug)]
pub struct SeededDraw {
    rng: StdRng,
}

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DrawRng for SeededDraw {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Always picks the same slot (modulo bound) - pins a draw outcome
#[derive(Clone, Copy, Debug)]
pub struct FixedDraw(pub usize);

impl DrawRng for FixedDraw {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0 % bound
    }
}
