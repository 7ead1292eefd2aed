use chrono::Duration;

use crate::data::models::item_models::{BOX_CEILING, BOX_FLOOR};

/// Review offset for each Leitner box, measured from the grading instant.
///
/// Box 0's one-minute offset is deliberate: a brand-new or just-demoted
/// item should resurface within the same session for re-drilling instead
/// of waiting a full day.
pub fn interval_for(box_index: i32) -> Duration {
    match box_index.clamp(BOX_FLOOR, BOX_CEILING) {
        0 => Duration::minutes(1),
        1 => Duration::days(1),
        2 => Duration::days(3),
        3 => Duration::days(7),
        4 => Duration::days(14),
        _ => Duration::days(30),
    }
}
