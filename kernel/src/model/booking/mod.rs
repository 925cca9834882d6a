use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{
    id::{BookingId, ListingId, UserId},
    user::BookingGuest,
};

pub mod event;

/// Lifecycle states of a booking. `Cancelled` is terminal: once a booking
/// is cancelled no further transition is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

/// Denormalized booking view: the entity plus the listing and guest fields
/// needed for direct presentation.
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub listing: BookingListing,
    pub guest: BookingGuest,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BookingListing {
    pub listing_id: ListingId,
    pub title: String,
    pub location_desc: String,
    pub owned_by: UserId,
}

/// Cancellation is permitted only to the booking's guest or to the owner
/// of the booked listing.
pub fn can_cancel(requested_by: UserId, guest: UserId, listing_owner: UserId) -> bool {
    requested_by == guest || requested_by == listing_owner
}

pub fn validate_date_range(check_in: NaiveDate, check_out: NaiveDate) -> AppResult<()> {
    if check_out <= check_in {
        return Err(AppError::UnprocessableEntity(format!(
            "check-out date ({check_out}) must be strictly after check-in date ({check_in})"
        )));
    }
    Ok(())
}

pub fn validate_guest_count(number_of_guests: i32, max_guests: i32) -> AppResult<()> {
    if number_of_guests < 1 {
        return Err(AppError::UnprocessableEntity(
            "number of guests must be at least 1".into(),
        ));
    }
    if number_of_guests > max_guests {
        return Err(AppError::UnprocessableEntity(format!(
            "number of guests ({number_of_guests}) exceeds the listing capacity ({max_guests})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn guest_can_cancel_own_booking() {
        let guest = UserId::new();
        let owner = UserId::new();
        assert!(can_cancel(guest, guest, owner));
    }

    #[test]
    fn listing_owner_can_cancel_booking_on_own_listing() {
        let guest = UserId::new();
        let owner = UserId::new();
        assert!(can_cancel(owner, guest, owner));
    }

    #[test]
    fn third_party_cannot_cancel() {
        let guest = UserId::new();
        let owner = UserId::new();
        let stranger = UserId::new();
        assert!(!can_cancel(stranger, guest, owner));
    }

    #[test]
    fn self_booking_host_can_cancel() {
        // host booked their own listing: guest == owner
        let host = UserId::new();
        assert!(can_cancel(host, host, host));
    }

    #[test]
    fn checkout_equal_to_checkin_is_rejected() {
        let res = validate_date_range(date("2025-06-01"), date("2025-06-01"));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn checkout_before_checkin_is_rejected() {
        let res = validate_date_range(date("2025-06-05"), date("2025-06-01"));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn checkout_after_checkin_is_accepted() {
        assert!(validate_date_range(date("2025-06-01"), date("2025-06-05")).is_ok());
    }

    #[test]
    fn guest_count_must_respect_capacity() {
        assert!(validate_guest_count(2, 4).is_ok());
        assert!(validate_guest_count(4, 4).is_ok());
        assert!(validate_guest_count(5, 4).is_err());
        assert!(validate_guest_count(0, 4).is_err());
    }

    #[test]
    fn status_parses_from_lowercase_names() {
        assert_eq!(
            BookingStatus::from_str("confirmed").unwrap(),
            BookingStatus::Confirmed
        );
        assert_eq!(
            BookingStatus::from_str("cancelled").unwrap(),
            BookingStatus::Cancelled
        );
        assert!(BookingStatus::from_str("paid").is_err());
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_ref()).unwrap(), status);
        }
    }

    #[test]
    fn only_cancelled_is_terminal() {
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(!BookingStatus::Completed.is_terminal());
    }
}
