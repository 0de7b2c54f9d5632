//! The two simulation operations: a single first-entree-time trial and the
//! n-draw batch driver.

use crate::value_objects::{Batch, Die, DrawCount, TrialOutcome};

/// The face a trial is waiting for.
const TARGET_FACE: u8 = 6;

/// Roll `die` until a six appears and return the 1-indexed attempt number.
///
/// The counter starts at 0 and increments once per draw, so the returned
/// outcome equals the position of the first six. Terminates almost surely
/// (success probability 1/6 per roll, expected 6 rolls per trial); no
/// iteration cap is applied.
pub fn first_six(die: &dyn Die) -> TrialOutcome {
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        if die.roll() == TARGET_FACE {
            return TrialOutcome::from_attempts(attempts);
        }
    }
}

/// Run [`first_six`] exactly `count` times, collecting outcomes in call order.
///
/// The returned batch always has length `count`; zero draws yield an empty
/// batch. Trials are i.i.d., so the order carries no meaning beyond
/// generation order.
pub fn draw_batch(die: &dyn Die, count: DrawCount) -> Batch {
    let mut batch = Batch::with_capacity(count.get() as usize);
    for _ in 0..count.get() {
        batch.push(first_six(die));
    }
    batch
}
