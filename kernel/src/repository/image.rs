use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::ListingImageId, listing::event::StoreListingImage};

/// Blob-store boundary for listing media: store a file, get an id back.
#[async_trait]
pub trait ListingImageRepository: Send + Sync {
    async fn store(&self, event: StoreListingImage) -> AppResult<ListingImageId>;
}
