use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::geography::show_municipality_list;

pub fn build_geography_routers() -> Router<AppRegistry> {
    let geography_routers = Router::new().route("/", get(show_municipality_list));

    Router::new().nest("/municipalities", geography_routers)
}
