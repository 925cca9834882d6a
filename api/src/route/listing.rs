use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    listing::{
        register_listing, show_listing, show_listing_list, show_own_listings, store_listing_image,
    },
    rating::{create_rating, show_listing_ratings},
};

pub fn build_listing_routers() -> Router<AppRegistry> {
    let listing_routers = Router::new()
        .route("/", get(show_listing_list))
        .route("/", post(register_listing))
        .route("/mine", get(show_own_listings))
        .route("/:listing_id", get(show_listing))
        .route("/:listing_id/image", post(store_listing_image))
        .route("/:listing_id/ratings", get(show_listing_ratings))
        .route("/:listing_id/ratings", post(create_rating));

    Router::new().nest("/listings", listing_routers)
}
