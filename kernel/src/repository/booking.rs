use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        Booking,
    },
    id::{BookingId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Creates a booking as one atomic write and returns its id.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    /// Cancels a booking on behalf of `requested_by`. No-op success when
    /// the booking is already cancelled.
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;
    /// Denormalized booking view by id.
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking>;
    /// All bookings made by the guest, most recent first.
    async fn find_by_guest(&self, guest_id: UserId) -> AppResult<Vec<Booking>>;
    /// All bookings on listings owned by the host, most recent first.
    async fn find_by_host(&self, host_id: UserId) -> AppResult<Vec<Booking>>;
}
