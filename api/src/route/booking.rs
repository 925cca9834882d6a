use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    cancel_booking, create_booking, show_guest_bookings, show_host_bookings,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(create_booking))
        .route("/me", get(show_guest_bookings))
        .route("/host", get(show_host_bookings))
        .route("/:booking_id/cancel", patch(cancel_booking));

    Router::new().nest("/bookings", booking_routers)
}
