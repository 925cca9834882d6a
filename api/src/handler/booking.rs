use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CancelBooking, CreateBooking},
        validate_date_range, validate_guest_count, BookingStatus,
    },
    id::BookingId,
};
use registry::AppRegistry;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingResponse, BookingsResponse, CancelBookingResponse, CreateBookingRequest},
};

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateBookingRequest>, AppError>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let listing = registry
        .listing_repository()
        .find_by_id(req.listing_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("listing ({}) not found", req.listing_id))
        })?;

    validate_date_range(req.check_in_date, req.check_out_date)?;
    validate_guest_count(req.number_of_guests, listing.max_guests)?;

    let status = match req.status.as_deref() {
        None => BookingStatus::Confirmed,
        Some(s) => BookingStatus::from_str(s)
            .map_err(|_| AppError::UnprocessableEntity(format!("unknown booking status: {s}")))?,
    };

    let nights = (req.check_out_date - req.check_in_date).num_days();
    let total_price = req
        .total_price
        .unwrap_or_else(|| listing.price_per_night * Decimal::from(nights));
    if total_price.is_sign_negative() {
        return Err(AppError::UnprocessableEntity(
            "total price must not be negative".into(),
        ));
    }

    let event = CreateBooking::new(
        listing.listing_id,
        user.id(),
        req.check_in_date,
        req.check_out_date,
        req.number_of_guests,
        total_price,
        status,
    );
    let booking_id = registry.booking_repository().create(event).await?;

    let booking = registry.booking_repository().find_by_id(booking_id).await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CancelBookingResponse>> {
    let event = CancelBooking::new(booking_id, user.id());
    registry.booking_repository().cancel(event).await?;

    Ok(Json(CancelBookingResponse {
        message: "booking cancelled".into(),
    }))
}

pub async fn show_guest_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_guest(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_host_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_host(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}
