use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{
    id::ListingId,
    listing::event::{CreateListing, StoreListingImage},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::listing::{
        CreateListingRequest, ImageStoredResponse, ListingListQuery, ListingResponse,
        ListingsResponse, StoreImageQuery,
    },
};

pub async fn register_listing(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateListingRequest>, AppError>,
) -> AppResult<(StatusCode, Json<ListingResponse>)> {
    req.validate(&())?;

    let municipality = registry
        .geography_repository()
        .find_by_name(&req.city)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("municipality ({}) not found", req.city)))?;

    let event = CreateListing::new(
        req.title,
        req.description,
        req.location_desc,
        req.price_per_night,
        req.bedrooms,
        req.bathrooms,
        req.max_guests,
        municipality.municipality_id,
        user.id(),
    );
    let listing_id = registry.listing_repository().create(event).await?;

    let listing = registry
        .listing_repository()
        .find_by_id(listing_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("listing ({listing_id}) not found")))?;

    Ok((StatusCode::CREATED, Json(listing.into())))
}

pub async fn show_listing_list(
    Query(query): Query<ListingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ListingsResponse>> {
    registry
        .listing_repository()
        .find_all(query.municipality)
        .await
        .map(ListingsResponse::from)
        .map(Json)
}

pub async fn show_listing(
    Path(listing_id): Path<ListingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ListingResponse>> {
    registry
        .listing_repository()
        .find_by_id(listing_id)
        .await
        .and_then(|listing| match listing {
            Some(listing) => Ok(Json(listing.into())),
            None => Err(AppError::EntityNotFound(format!(
                "listing ({listing_id}) not found"
            ))),
        })
}

/// Listings owned by the caller. Deliberately non-leaking: an
/// unauthenticated caller gets an empty collection, not an error.
pub async fn show_own_listings(
    user: Option<AuthorizedUser>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ListingsResponse>> {
    let Some(user) = user else {
        return Ok(Json(ListingsResponse { items: vec![] }));
    };
    registry
        .listing_repository()
        .find_by_owner(user.id())
        .await
        .map(ListingsResponse::from)
        .map(Json)
}

pub async fn store_listing_image(
    user: AuthorizedUser,
    Path(listing_id): Path<ListingId>,
    Query(query): Query<StoreImageQuery>,
    State(registry): State<AppRegistry>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ImageStoredResponse>)> {
    let listing = registry
        .listing_repository()
        .find_by_id(listing_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("listing ({listing_id}) not found")))?;

    if listing.owner.owner_id != user.id() {
        return Err(AppError::ForbiddenOperation);
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let event = StoreListingImage::new(listing_id, query.filename, content_type, body.to_vec());
    let image_id = registry.listing_image_repository().store(event).await?;

    Ok((StatusCode::CREATED, Json(ImageStoredResponse { image_id })))
}
