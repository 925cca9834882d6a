use derive_new::new;

use crate::model::id::{ListingId, UserId};

#[derive(new)]
pub struct CreateRating {
    pub listing_id: ListingId,
    pub guest_id: UserId,
    pub score: i32,
    pub comment: Option<String>,
}
