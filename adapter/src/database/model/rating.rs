use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ListingId, RatingId, UserId},
    rating::Rating,
};

#[derive(sqlx::FromRow)]
pub struct RatingRow {
    pub rating_id: RatingId,
    pub listing_id: ListingId,
    pub guest_id: UserId,
    pub guest_name: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RatingRow> for Rating {
    fn from(value: RatingRow) -> Self {
        let RatingRow {
            rating_id,
            listing_id,
            guest_id,
            guest_name,
            score,
            comment,
            created_at,
        } = value;
        Rating {
            rating_id,
            listing_id,
            guest_id,
            guest_name,
            score,
            comment,
            created_at,
        }
    }
}
