use rust_decimal::Decimal;

use crate::model::{
    id::{ListingId, MunicipalityId},
    user::ListingOwner,
};

pub mod event;

#[derive(Debug, Clone)]
pub struct Listing {
    pub listing_id: ListingId,
    pub title: String,
    pub description: String,
    pub location_desc: String,
    pub price_per_night: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_guests: i32,
    pub municipality_id: MunicipalityId,
    pub municipality_name: String,
    pub owner: ListingOwner,
}
