use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ListingId, RatingId, UserId},
    rating::{Rating, RatingSummary},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    #[serde(alias = "rating")]
    #[garde(range(min = 1, max = 5))]
    pub score: i32,
    #[serde(default)]
    #[garde(skip)]
    pub comment: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCreatedResponse {
    pub rating_id: RatingId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub rating_id: RatingId,
    pub listing_id: ListingId,
    pub guest_id: UserId,
    pub guest_name: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(value: Rating) -> Self {
        let Rating {
            rating_id,
            listing_id,
            guest_id,
            guest_name,
            score,
            comment,
            created_at,
        } = value;
        Self {
            rating_id,
            listing_id,
            guest_id,
            guest_name,
            score,
            comment,
            created_at,
        }
    }
}

/// Per-listing aggregate as presented to hosts and browsers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummaryResponse {
    pub listing_id: ListingId,
    pub listing_title: String,
    pub average_rating: f64,
    pub rating_count: usize,
    pub ratings: Vec<RatingResponse>,
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(value: RatingSummary) -> Self {
        let RatingSummary {
            listing_id,
            listing_title,
            average,
            count,
            ratings,
        } = value;
        Self {
            listing_id,
            listing_title,
            average_rating: average,
            rating_count: count,
            ratings: ratings.into_iter().map(RatingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRatingsResponse {
    pub items: Vec<RatingSummaryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_accepts_legacy_rating_key() {
        let req: CreateRatingRequest =
            serde_json::from_value(json!({ "rating": 4 })).unwrap();
        assert_eq!(req.score, 4);
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn out_of_range_score_fails_validation() {
        let req: CreateRatingRequest = serde_json::from_value(json!({ "score": 6 })).unwrap();
        assert!(req.validate(&()).is_err());
        let req: CreateRatingRequest = serde_json::from_value(json!({ "score": 0 })).unwrap();
        assert!(req.validate(&()).is_err());
    }
}
