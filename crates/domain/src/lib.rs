//! SixSim Domain - core types and operations for the first-entree-time
//! simulation.
//!
//! Pure logic only: die rolls enter through the [`Die`] port, so every
//! operation in this crate is deterministic under test and carries no I/O.

pub mod error;
pub mod simulation;
pub mod value_objects;

pub use error::DomainError;
pub use simulation::{draw_batch, first_six};
pub use value_objects::{Batch, Die, DrawCount, FixedDie, TrialOutcome};

#[cfg(any(test, feature = "testing"))]
pub use value_objects::MockDie;
