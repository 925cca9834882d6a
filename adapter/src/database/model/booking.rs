use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, BookingListing, BookingStatus},
    id::{BookingId, ListingId, UserId},
    user::BookingGuest,
};
use rust_decimal::Decimal;
use shared::error::AppError;

/// Booking joined with its listing and guest for the denormalized view.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub listing_id: ListingId,
    pub listing_title: String,
    pub listing_location: String,
    pub listing_owned_by: UserId,
    pub guest_id: UserId,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            listing_id,
            listing_title,
            listing_location,
            listing_owned_by,
            guest_id,
            guest_name,
            guest_email,
            check_in_date,
            check_out_date,
            number_of_guests,
            total_price,
            status,
            created_at,
            updated_at,
        } = value;
        let status = BookingStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown booking status: {status}"))
        })?;
        Ok(Booking {
            booking_id,
            listing: BookingListing {
                listing_id,
                title: listing_title,
                location_desc: listing_location,
                owned_by: listing_owned_by,
            },
            guest: BookingGuest {
                user_id: guest_id,
                user_name: guest_name,
                email: guest_email,
            },
            check_in_date,
            check_out_date,
            number_of_guests,
            total_price,
            status,
            created_at,
            updated_at,
        })
    }
}

/// Slim row taken under a row lock while deciding a cancellation.
#[derive(sqlx::FromRow)]
pub struct BookingStateRow {
    pub booking_id: BookingId,
    pub guest_id: UserId,
    pub listing_owned_by: UserId,
    pub status: String,
}
