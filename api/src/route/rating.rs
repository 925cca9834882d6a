use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::rating::show_host_ratings;

pub fn build_rating_routers() -> Router<AppRegistry> {
    let rating_routers = Router::new().route("/host", get(show_host_ratings));

    Router::new().nest("/ratings", rating_routers)
}
