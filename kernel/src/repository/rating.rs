use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ListingId, RatingId},
    rating::{event::CreateRating, Rating},
};

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Appends a rating to the ledger. Ratings are never updated or
    /// deleted afterwards.
    async fn create(&self, event: CreateRating) -> AppResult<RatingId>;
    /// Ratings for one listing, newest first.
    async fn find_by_listing(&self, listing_id: ListingId) -> AppResult<Vec<Rating>>;
}
