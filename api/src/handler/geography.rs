use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::geography::MunicipalitiesResponse;

pub async fn show_municipality_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MunicipalitiesResponse>> {
    registry
        .geography_repository()
        .find_all()
        .await
        .map(MunicipalitiesResponse::from)
        .map(Json)
}
