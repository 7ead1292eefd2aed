use chrono::NaiveDateTime;
use diesel::{AsChangeset, Insertable, Queryable};
use serde::Serialize;

use crate::schema::review_items;

pub const BOX_FLOOR: i32 = 0;
pub const BOX_CEILING: i32 = 5;
pub const DIFFICULTY_FLOOR: f64 = 0.0;
pub const DIFFICULTY_CEILING: f64 = 5.0;
pub const DEFAULT_DIFFICULTY: f64 = 2.5;

/// A flashcard or exercise-progress record for one learner.
///
/// `box_index` is the Leitner box (0 = newest/hardest, 5 = mastered);
/// `difficulty` is a continuous score tracked alongside it but not used
/// for scheduling. Counters satisfy
/// `review_count == correct_count + incorrect_count` after every grading.
#[derive(Queryable, Insertable, AsChangeset, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = review_items)]
#[diesel(treat_none_as_null = true)]
pub struct ReviewItem {
    pub item_id: i32,
    pub user_id: i32,
    pub box_index: i32,
    pub difficulty: f64,
    pub review_count: i32,
    pub correct_count: i32,
    pub incorrect_count: i32,
    pub last_reviewed_at: Option<NaiveDateTime>,
    pub next_review_due: Option<NaiveDateTime>,
}

impl ReviewItem {
    /// A freshly added item: box 0, default difficulty, never reviewed.
    pub fn new(item_id: i32, user_id: i32) -> Self {
        ReviewItem {
            item_id,
            user_id,
            box_index: BOX_FLOOR,
            difficulty: DEFAULT_DIFFICULTY,
            review_count: 0,
            correct_count: 0,
            incorrect_count: 0,
            last_reviewed_at: None,
            next_review_due: None,
        }
    }

    /// Never-reviewed items are due unconditionally; otherwise an item is
    /// due once its scheduled timestamp has arrived (or was never set).
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        if self.last_reviewed_at.is_none() {
            return true;
        }
        match self.next_review_due {
            Some(due) => due <= now,
            None => true,
        }
    }

    /// Clamps stored box/difficulty back into range. Out-of-range values
    /// are recoverable corruption, not an error. Returns true if anything
    /// was adjusted.
    pub(crate) fn clamp_ranges(&mut self) -> bool {
        let box_index = self.box_index.clamp(BOX_FLOOR, BOX_CEILING);
        let difficulty = self.difficulty.clamp(DIFFICULTY_FLOOR, DIFFICULTY_CEILING);
        let adjusted = box_index != self.box_index || difficulty != self.difficulty;
        self.box_index = box_index;
        self.difficulty = difficulty;
        adjusted
    }
}

/// Compact grading result handed back to the session/UI layer.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub box_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_due: Option<NaiveDateTime>,
    pub review_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_item_starts_in_box_zero_with_default_difficulty() {
        let item = ReviewItem::new(7, 1);
        assert_eq!(item.box_index, 0);
        assert_eq!(item.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(item.review_count, 0);
        assert!(item.last_reviewed_at.is_none());
        assert!(item.next_review_due.is_none());
    }

    #[test]
    fn never_reviewed_item_is_due_even_with_future_schedule() {
        let mut item = ReviewItem::new(7, 1);
        item.next_review_due = Some(at(12));
        assert!(item.is_due(at(6)));
    }

    #[test]
    fn reviewed_item_is_due_once_timestamp_passes() {
        let mut item = ReviewItem::new(7, 1);
        item.last_reviewed_at = Some(at(6));
        item.next_review_due = Some(at(9));
        assert!(!item.is_due(at(8)));
        assert!(item.is_due(at(9)));
        assert!(item.is_due(at(10)));
    }

    #[test]
    fn clamp_ranges_repairs_out_of_range_fields() {
        let mut item = ReviewItem::new(7, 1);
        item.box_index = 9;
        item.difficulty = -1.0;
        assert!(item.clamp_ranges());
        assert_eq!(item.box_index, BOX_CEILING);
        assert_eq!(item.difficulty, DIFFICULTY_FLOOR);
        assert!(!item.clamp_ranges());
    }
}
