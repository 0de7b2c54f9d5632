//! Die-roll port for the simulation.
//!
//! This port abstracts the random source, enabling:
//! - Deterministic testing with a fixed or mocked face sequence
//! - Reproducible scenarios
//! - Clean hexagonal architecture (no ambient randomness in the domain layer)

/// A fair six-sided die.
///
/// Implementations must return faces uniformly distributed over `1..=6`,
/// each roll independent of the last.
///
/// # Implementations
///
/// - `ThreadDie` in the runner crate (production, uses `rand::thread_rng()`)
/// - `MockDie` via mockall (testing)
/// - [`FixedDie`] for deterministic testing (returns a fixed face sequence)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Die: Send + Sync {
    /// Roll once, returning a face in `1..=6`.
    fn roll(&self) -> u8;
}

/// Fixed die for deterministic testing.
///
/// Returns faces from a provided sequence, cycling if needed.
/// Thread-safe via atomic operations.
#[derive(Debug)]
pub struct FixedDie {
    faces: Vec<u8>,
    index: std::sync::atomic::AtomicUsize,
}

impl Clone for FixedDie {
    fn clone(&self) -> Self {
        Self {
            faces: self.faces.clone(),
            index: std::sync::atomic::AtomicUsize::new(
                self.index.load(std::sync::atomic::Ordering::SeqCst),
            ),
        }
    }
}

impl FixedDie {
    /// Create a new FixedDie with the given sequence of faces.
    ///
    /// Faces outside `1..=6` are clamped when rolled. The sequence must not
    /// be empty.
    pub fn new(faces: Vec<u8>) -> Self {
        debug_assert!(!faces.is_empty(), "FixedDie needs at least one face");
        Self {
            faces,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a FixedDie that always returns the same face.
    pub fn constant(face: u8) -> Self {
        Self::new(vec![face])
    }
}

impl Die for FixedDie {
    fn roll(&self) -> u8 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.faces[idx % self.faces.len()].clamp(1, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_die_constant() {
        let die = FixedDie::constant(6);
        assert_eq!(die.roll(), 6);
        assert_eq!(die.roll(), 6);
    }

    #[test]
    fn test_fixed_die_sequence_cycles() {
        let die = FixedDie::new(vec![1, 3, 5]);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 3);
        assert_eq!(die.roll(), 5);
        // Cycles back
        assert_eq!(die.roll(), 1);
    }

    #[test]
    fn test_fixed_die_clamps_out_of_range_faces() {
        let die = FixedDie::new(vec![0, 9]);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 6);
    }

    #[test]
    fn test_mock_die() {
        let mut die = MockDie::new();
        die.expect_roll().times(2).return_const(4u8);
        assert_eq!(die.roll(), 4);
        assert_eq!(die.roll(), 4);
    }
}
