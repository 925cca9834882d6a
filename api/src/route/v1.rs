use axum::Router;
use registry::AppRegistry;

use super::{
    auth, booking::build_booking_routers, geography::build_geography_routers,
    health::build_health_check_routers, listing::build_listing_routers,
    rating::build_rating_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_listing_routers())
        .merge(build_booking_routers())
        .merge(build_rating_routers())
        .merge(build_geography_routers())
        .merge(auth::routes());
    Router::new().nest("/api/v1", router)
}
