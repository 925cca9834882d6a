use kernel::model::{
    id::{ListingId, MunicipalityId, UserId},
    listing::Listing,
    user::ListingOwner,
};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct ListingRow {
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
    pub owned_by: UserId,
    pub owner_name: String,
}

impl From<ListingRow> for Listing {
    fn from(value: ListingRow) -> Self {
        let ListingRow {
            listing_id,
            title,
            description,
            location_desc,
            price_per_night,
            bedrooms,
            bathrooms,
            max_guests,
            municipality_id,
            municipality_name,
            owned_by,
            owner_name,
        } = value;
        Listing {
            listing_id,
            title,
            description,
            location_desc,
            price_per_night,
            bedrooms,
            bathrooms,
            max_guests,
            municipality_id,
            municipality_name,
            owner: ListingOwner {
                owner_id: owned_by,
                owner_name,
            },
        }
    }
}
