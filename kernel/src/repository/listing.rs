use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ListingId, UserId},
    listing::{event::CreateListing, Listing},
};

#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Publishes a listing and flags its owner as a host, atomically.
    async fn create(&self, event: CreateListing) -> AppResult<ListingId>;
    async fn find_by_id(&self, listing_id: ListingId) -> AppResult<Option<Listing>>;
    /// All published listings, optionally narrowed to an exact
    /// municipality name. An unknown name yields an empty collection.
    async fn find_all(&self, municipality: Option<String>) -> AppResult<Vec<Listing>>;
    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Listing>>;
}
