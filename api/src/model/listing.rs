use garde::Validate;
use kernel::model::{
    id::{ListingId, ListingImageId, MunicipalityId, UserId},
    listing::Listing,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(length(min = 1))]
    pub location_desc: String,
    #[garde(custom(non_negative_price))]
    pub price_per_night: Decimal,
    #[garde(range(min = 1))]
    pub bedrooms: i32,
    #[garde(range(min = 1))]
    pub bathrooms: i32,
    #[garde(range(min = 1))]
    pub max_guests: i32,
    /// Municipality name, resolved against the geography table.
    #[garde(length(min = 1))]
    pub city: String,
}

fn non_negative_price(value: &Decimal, _ctx: &()) -> garde::Result {
    if value.is_sign_negative() {
        return Err(garde::Error::new("price per night must not be negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingListQuery {
    /// Exact-match municipality name filter.
    pub municipality: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub items: Vec<ListingResponse>,
}

impl From<Vec<Listing>> for ListingsResponse {
    fn from(value: Vec<Listing>) -> Self {
        Self {
            items: value.into_iter().map(ListingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
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
    pub owner_id: UserId,
    pub owner_name: String,
}

impl From<Listing> for ListingResponse {
    fn from(value: Listing) -> Self {
        let Listing {
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
            owner,
        } = value;
        Self {
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
            owner_id: owner.owner_id,
            owner_name: owner.owner_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreImageQuery {
    pub filename: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStoredResponse {
    pub image_id: ListingImageId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(price: &str, bedrooms: i32) -> CreateListingRequest {
        serde_json::from_value(json!({
            "title": "Loft in El Poblado",
            "description": "Bright loft near the metro",
            "locationDesc": "El Poblado, Medellín",
            "pricePerNight": price,
            "bedrooms": bedrooms,
            "bathrooms": 1,
            "maxGuests": 4,
            "city": "Medellín",
        }))
        .unwrap()
    }

    #[test]
    fn well_formed_listing_passes_validation() {
        assert!(request("100000", 1).validate(&()).is_ok());
    }

    #[test]
    fn negative_price_fails_validation() {
        assert!(request("-1", 1).validate(&()).is_err());
    }

    #[test]
    fn zero_bedrooms_fails_validation() {
        assert!(request("100000", 0).validate(&()).is_err());
    }
}
