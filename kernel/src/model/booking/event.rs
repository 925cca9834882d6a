use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

use super::BookingStatus;
use crate::model::id::{BookingId, ListingId, UserId};

#[derive(new)]
pub struct CreateBooking {
    pub listing_id: ListingId,
    pub guest: UserId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_by: UserId,
}
