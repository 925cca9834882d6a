use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::Booking,
    id::{BookingId, ListingId, UserId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking creation payload. Legacy clients send several spellings for the
/// same field; each alias maps onto a single canonical field here, before
/// any validation runs.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(alias = "listing", alias = "property_id", alias = "propertyId")]
    #[garde(skip)]
    pub listing_id: ListingId,
    #[serde(alias = "check_in_date", alias = "start_date", alias = "startDate")]
    #[garde(skip)]
    pub check_in_date: NaiveDate,
    #[serde(alias = "check_out_date", alias = "end_date", alias = "endDate")]
    #[garde(skip)]
    pub check_out_date: NaiveDate,
    #[serde(
        default = "default_number_of_guests",
        alias = "number_of_guests",
        alias = "guests"
    )]
    #[garde(range(min = 1))]
    pub number_of_guests: i32,
    #[serde(default, alias = "total_price")]
    #[garde(skip)]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    #[garde(skip)]
    pub status: Option<String>,
}

fn default_number_of_guests() -> i32 {
    1
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

/// Denormalized booking view for direct presentation: entity fields plus
/// listing and guest display fields.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub listing_id: ListingId,
    pub listing_title: String,
    pub listing_location: String,
    pub listing_image: String,
    pub guest_id: UserId,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_avatar: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            listing,
            guest,
            check_in_date,
            check_out_date,
            number_of_guests,
            total_price,
            status,
            created_at,
            updated_at,
        } = value;
        Self {
            booking_id,
            listing_id: listing.listing_id,
            listing_title: listing.title,
            listing_location: listing.location_desc,
            listing_image: listing_image_url(),
            guest_id: guest.user_id,
            guest_name: guest.user_name.clone(),
            guest_email: guest.email,
            guest_avatar: guest_avatar_url(&guest.user_name),
            check_in_date,
            check_out_date,
            number_of_guests,
            total_price,
            status: status.to_string(),
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingResponse {
    pub message: String,
}

// Presentation-only projections: not stored state, computed per response.
// TODO: serve the real first image of the listing once listing media is
// wired into the read path.
fn listing_image_url() -> String {
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400&h=300&fit=crop".into()
}

fn guest_avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_camel_case_payload_deserializes() {
        let req: CreateBookingRequest = serde_json::from_value(json!({
            "listingId": "4be0ae91-6e65-45b6-91b9-3a4b36f66f78",
            "checkInDate": "2025-06-01",
            "checkOutDate": "2025-06-05",
            "numberOfGuests": 2,
            "totalPrice": "100000",
        }))
        .unwrap();
        assert_eq!(req.number_of_guests, 2);
        assert_eq!(req.total_price, Some(Decimal::from(100000)));
        assert!(req.status.is_none());
    }

    #[test]
    fn legacy_aliases_normalize_to_canonical_fields() {
        let req: CreateBookingRequest = serde_json::from_value(json!({
            "property_id": "4be0ae91-6e65-45b6-91b9-3a4b36f66f78",
            "start_date": "2025-06-01",
            "end_date": "2025-06-05",
            "guests": 3,
        }))
        .unwrap();
        assert_eq!(req.listing_id.to_string(), "4be0ae91-6e65-45b6-91b9-3a4b36f66f78");
        assert_eq!(req.check_in_date.to_string(), "2025-06-01");
        assert_eq!(req.check_out_date.to_string(), "2025-06-05");
        assert_eq!(req.number_of_guests, 3);
    }

    #[test]
    fn listing_alias_also_accepted() {
        let req: CreateBookingRequest = serde_json::from_value(json!({
            "listing": "4be0ae91-6e65-45b6-91b9-3a4b36f66f78",
            "check_in_date": "2025-06-01",
            "check_out_date": "2025-06-02",
        }))
        .unwrap();
        assert_eq!(req.number_of_guests, 1, "guest count defaults to 1");
    }

    #[test]
    fn malformed_date_is_rejected_at_the_boundary() {
        let res: Result<CreateBookingRequest, _> = serde_json::from_value(json!({
            "listingId": "4be0ae91-6e65-45b6-91b9-3a4b36f66f78",
            "checkInDate": "not-a-date",
            "checkOutDate": "2025-06-05",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn zero_guests_fails_validation() {
        let req: CreateBookingRequest = serde_json::from_value(json!({
            "listingId": "4be0ae91-6e65-45b6-91b9-3a4b36f66f78",
            "checkInDate": "2025-06-01",
            "checkOutDate": "2025-06-05",
            "numberOfGuests": 0,
        }))
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn avatar_projection_is_seeded_by_user_name() {
        let url = guest_avatar_url("maria");
        assert!(url.ends_with("seed=maria"));
    }
}
