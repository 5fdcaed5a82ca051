//! Short code candidate generation.
//!
//! Generators only propose candidates. Whether a candidate is free is decided
//! by the store's unique constraint, see
//! [`crate::application::services::CodeAllocator`].

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::base62;

/// Codes that collide with fixed routes and are never handed out.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "static", "images"];

/// Default first counter value for [`SequentialGenerator`].
pub const DEFAULT_SEED_BASE: u64 = 100_000;

/// Default counter stride for [`SequentialGenerator`].
pub const DEFAULT_SEED_STRIDE: u64 = 50_000;

/// Default length of codes drawn by [`RandomGenerator`].
pub const DEFAULT_RANDOM_LENGTH: usize = 7;

/// Returns true if `code` is reserved for a system route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Source of candidate short codes.
pub trait CodeGenerator: Send + Sync {
    /// Produces the next candidate. Every call yields a fresh candidate.
    fn next_candidate(&self) -> String;
}

/// Counter-based generator.
///
/// Each call takes the current seed and advances it by the stride with a
/// single atomic fetch-and-add, so concurrent callers never observe the same
/// seed. The counter lives in memory only and restarts at `base` with the
/// process.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
    stride: u64,
}

impl SequentialGenerator {
    pub fn new(base: u64, stride: u64) -> Self {
        Self {
            counter: AtomicU64::new(base),
            stride,
        }
    }

    /// Seed the next call to [`CodeGenerator::next_candidate`] will encode.
    #[cfg(test)]
    pub fn peek_seed(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_BASE, DEFAULT_SEED_STRIDE)
    }
}

impl CodeGenerator for SequentialGenerator {
    fn next_candidate(&self) -> String {
        let seed = self.counter.fetch_add(self.stride, Ordering::SeqCst);
        base62::encode(seed)
    }
}

/// Draws fixed-length codes uniformly from the base-62 alphabet.
///
/// Holds no shared state, so restarts cannot replay earlier candidates.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_LENGTH)
    }
}

impl CodeGenerator for RandomGenerator {
    fn next_candidate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| char::from(base62::ALPHABET[rng.random_range(0..base62::ALPHABET.len())]))
            .collect()
    }
}
