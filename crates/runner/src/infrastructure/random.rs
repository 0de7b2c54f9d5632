//! Thread-safe die adapter backed by `rand`.
//!
//! Implements the domain's `Die` port using `rand::thread_rng()`.

use rand::Rng;
use sixsim_domain::Die;

/// Production six-sided die using the thread-local RNG.
///
/// This adapter keeps `rand` out of the domain layer: the simulation only
/// sees the `Die` trait.
#[derive(Debug, Clone, Default)]
pub struct ThreadDie;

impl ThreadDie {
    /// Create a new ThreadDie.
    pub fn new() -> Self {
        Self
    }
}

impl Die for ThreadDie {
    fn roll(&self) -> u8 {
        rand::thread_rng().gen_range(1..=6)
    }
}
