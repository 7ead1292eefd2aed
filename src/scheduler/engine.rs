use chrono::NaiveDateTime;
use diesel::SqliteConnection;

use crate::data::models::{GradeSummary, ReviewItem, SchedulerError};
use crate::data::repositories::ItemRepository;

use super::{intervals, leitner};

pub const DEFAULT_SESSION_LIMIT: i64 = 20;

/// Applies one graded attempt to an item.
///
/// Pure and total: `now` is supplied by the caller (never read from a
/// clock here) and the result is only persisted by the caller, so the same
/// inputs always yield the same item. Re-running after a write conflict is
/// therefore safe.
pub fn grade(item: &ReviewItem, is_correct: bool, now: NaiveDateTime) -> ReviewItem {
    let box_index = leitner::next_box(item.box_index, is_correct);
    let difficulty = leitner::next_difficulty(item.difficulty, is_correct);

    let (correct_count, incorrect_count) = if is_correct {
        (item.correct_count + 1, item.incorrect_count)
    } else {
        (item.correct_count, item.incorrect_count + 1)
    };

    ReviewItem {
        item_id: item.item_id,
        user_id: item.user_id,
        box_index,
        difficulty,
        review_count: item.review_count + 1,
        correct_count,
        incorrect_count,
        last_reviewed_at: Some(now),
        next_review_due: Some(now + intervals::interval_for(box_index)),
    }
}

/// The scheduling engine bound to a database connection.
pub struct ReviewScheduler<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ReviewScheduler<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        ReviewScheduler { conn }
    }

    /// Records a graded attempt and reschedules the item.
    ///
    /// Box, difficulty, counters and both timestamps land in one row
    /// update, conditional on the review count seen at load time. A
    /// concurrent grading of the same item surfaces as
    /// [`SchedulerError::Conflict`]; the caller reloads and grades again.
    pub fn grade_attempt(
        &mut self,
        item_id: i32,
        is_correct: bool,
        now: NaiveDateTime,
    ) -> Result<GradeSummary, SchedulerError> {
        let item = ItemRepository::find_by_id(self.conn, item_id)?
            .ok_or(SchedulerError::NotFound)?;

        let graded = grade(&item, is_correct, now);

        let updated = ItemRepository::save_graded(self.conn, &graded, item.review_count)?;
        if updated == 0 {
            if ItemRepository::exists(self.conn, item_id)? {
                return Err(SchedulerError::Conflict);
            }
            return Err(SchedulerError::NotFound);
        }

        log::debug!(
            "Graded item {} for user {}: box {} -> {}, due {:?}",
            graded.item_id,
            graded.user_id,
            item.box_index,
            graded.box_index,
            graded.next_review_due,
        );

        Ok(GradeSummary {
            box_index: graded.box_index,
            next_review_due: graded.next_review_due,
            review_count: graded.review_count,
        })
    }

    /// Items due for review for one learner, never-reviewed first and then
    /// oldest due, truncated to `limit`.
    pub fn get_due_items(
        &mut self,
        user_id: i32,
        now: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<ReviewItem>, SchedulerError> {
        Ok(ItemRepository::due_for_user(self.conn, user_id, now, limit)?)
    }

    /// Due set capped at the standard session size.
    pub fn get_due_session(
        &mut self,
        user_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<ReviewItem>, SchedulerError> {
        self.get_due_items(user_id, now, DEFAULT_SESSION_LIMIT)
    }
}
