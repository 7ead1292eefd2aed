use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::data::models::ReviewItem;
use crate::schema::review_items;

pub struct ItemRepository;

impl ItemRepository {
    pub fn find_by_id(
        conn: &mut SqliteConnection,
        item_id: i32,
    ) -> Result<Option<ReviewItem>, diesel::result::Error> {
        let item = review_items::table
            .filter(review_items::item_id.eq(item_id))
            .first::<ReviewItem>(conn)
            .optional()?;

        Ok(item.map(Self::sanitize))
    }

    pub fn create(
        conn: &mut SqliteConnection,
        item_id: i32,
        user_id: i32,
    ) -> Result<ReviewItem, diesel::result::Error> {
        let item = ReviewItem::new(item_id, user_id);

        diesel::insert_into(review_items::table)
            .values(&item)
            .execute(conn)?;

        Ok(item)
    }

    /// Writes a graded item as a single conditional update: the row is only
    /// touched if its review count still matches what the caller loaded.
    /// Zero affected rows means a concurrent grading won or the row is gone.
    pub fn save_graded(
        conn: &mut SqliteConnection,
        graded: &ReviewItem,
        expected_review_count: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(
            review_items::table
                .filter(review_items::item_id.eq(graded.item_id))
                .filter(review_items::review_count.eq(expected_review_count)),
        )
        .set(graded)
        .execute(conn)
    }

    pub fn exists(
        conn: &mut SqliteConnection,
        item_id: i32,
    ) -> Result<bool, diesel::result::Error> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(
            review_items::table.filter(review_items::item_id.eq(item_id)),
        ))
        .get_result(conn)
    }

    /// Items due for one learner at `now`: never-reviewed items always
    /// qualify, otherwise the scheduled timestamp must have passed. Each
    /// call is a fresh query. Ascending order on `next_review_due` puts
    /// NULL (never-reviewed) rows first, then oldest due.
    pub fn due_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
        now: NaiveDateTime,
        limit: i64,
    ) -> Result<Vec<ReviewItem>, diesel::result::Error> {
        let items = review_items::table
            .filter(review_items::user_id.eq(user_id))
            .filter(
                review_items::last_reviewed_at
                    .is_null()
                    .or(review_items::next_review_due.is_null())
                    .or(review_items::next_review_due.le(now)),
            )
            .order(review_items::next_review_due.asc())
            .limit(limit)
            .load::<ReviewItem>(conn)?;

        Ok(items.into_iter().map(Self::sanitize).collect())
    }

    fn sanitize(mut item: ReviewItem) -> ReviewItem {
        if item.clamp_ranges() {
            log::warn!(
                "Clamped out-of-range box/difficulty on stored item {}",
                item.item_id
            );
        }
        item
    }
}
