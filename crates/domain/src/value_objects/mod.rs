//! Value objects - Immutable objects defined by their attributes

mod die;
mod trial;

pub use die::{Die, FixedDie};
pub use trial::{Batch, DrawCount, TrialOutcome};

#[cfg(any(test, feature = "testing"))]
pub use die::MockDie;
