use derive_new::new;
use rust_decimal::Decimal;

use crate::model::id::{ListingId, MunicipalityId, UserId};

#[derive(new)]
pub struct CreateListing {
    pub title: String,
    pub description: String,
    pub location_desc: String,
    pub price_per_night: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_guests: i32,
    pub municipality_id: MunicipalityId,
    pub owned_by: UserId,
}

#[derive(new)]
pub struct StoreListingImage {
    pub listing_id: ListingId,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}
