//! Leitner box transitions and the difficulty estimate.

use crate::data::models::item_models::{
    BOX_CEILING, BOX_FLOOR, DIFFICULTY_CEILING, DIFFICULTY_FLOOR,
};

const CORRECT_DIFFICULTY_STEP: f64 = 0.1;
const INCORRECT_DIFFICULTY_STEP: f64 = 0.3;

/// A correct answer promotes the item one box (capped at the top box); a
/// wrong answer demotes it all the way back to box 0. No partial credit —
/// the full demotion is deliberate harsh-correction policy, not the
/// classic one-step Leitner demotion.
pub fn next_box(current: i32, is_correct: bool) -> i32 {
    let current = current.clamp(BOX_FLOOR, BOX_CEILING);
    if is_correct {
        (current + 1).min(BOX_CEILING)
    } else {
        BOX_FLOOR
    }
}

/// Continuous difficulty score, recorded alongside the box but not used
/// for scheduling. Wrong answers raise it three times faster than correct
/// answers lower it, biasing the estimate toward caution.
pub fn next_difficulty(current: f64, is_correct: bool) -> f64 {
    let step = if is_correct {
        -CORRECT_DIFFICULTY_STEP
    } else {
        INCORRECT_DIFFICULTY_STEP
    };
    (current + step).clamp(DIFFICULTY_FLOOR, DIFFICULTY_CEILING)
}
