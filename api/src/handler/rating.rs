use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::{id::ListingId, rating::event::CreateRating, rating::RatingSummary};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::rating::{
        CreateRatingRequest, HostRatingsResponse, RatingCreatedResponse, RatingSummaryResponse,
    },
};

pub async fn create_rating(
    user: AuthorizedUser,
    Path(listing_id): Path<ListingId>,
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateRatingRequest>, AppError>,
) -> AppResult<(StatusCode, Json<RatingCreatedResponse>)> {
    req.validate(&())?;

    registry
        .listing_repository()
        .find_by_id(listing_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("listing ({listing_id}) not found")))?;

    let event = CreateRating::new(listing_id, user.id(), req.score, req.comment);
    let rating_id = registry.rating_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(RatingCreatedResponse { rating_id })))
}

pub async fn show_listing_ratings(
    Path(listing_id): Path<ListingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RatingSummaryResponse>> {
    let listing = registry
        .listing_repository()
        .find_by_id(listing_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("listing ({listing_id}) not found")))?;

    let ratings = registry
        .rating_repository()
        .find_by_listing(listing_id)
        .await?;
    let summary = RatingSummary::from_ratings(listing.listing_id, listing.title, ratings);

    Ok(Json(summary.into()))
}

/// One aggregate per listing the caller owns. Requires authentication:
/// ratings expose host-identifying data.
pub async fn show_host_ratings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HostRatingsResponse>> {
    let listings = registry
        .listing_repository()
        .find_by_owner(user.id())
        .await?;

    let mut items = Vec::with_capacity(listings.len());
    for listing in listings {
        let ratings = registry
            .rating_repository()
            .find_by_listing(listing.listing_id)
            .await?;
        let summary = RatingSummary::from_ratings(listing.listing_id, listing.title, ratings);
        items.push(RatingSummaryResponse::from(summary));
    }

    Ok(Json(HostRatingsResponse { items }))
}
