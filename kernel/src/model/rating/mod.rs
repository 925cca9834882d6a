use chrono::{DateTime, Utc};

use crate::model::id::{ListingId, RatingId, UserId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Rating {
    pub rating_id: RatingId,
    pub listing_id: ListingId,
    pub guest_id: UserId,
    pub guest_name: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-listing rating aggregate. `average` is 0.0, never absent, when the
/// listing has no ratings yet.
#[derive(Debug, Clone)]
pub struct RatingSummary {
    pub listing_id: ListingId,
    pub listing_title: String,
    pub average: f64,
    pub count: usize,
    pub ratings: Vec<Rating>,
}

impl RatingSummary {
    /// Aggregates ratings already ordered by creation time descending.
    pub fn from_ratings(
        listing_id: ListingId,
        listing_title: String,
        ratings: Vec<Rating>,
    ) -> Self {
        let count = ratings.len();
        let average = if count == 0 {
            0.0
        } else {
            ratings.iter().map(|r| f64::from(r.score)).sum::<f64>() / count as f64
        };
        Self {
            listing_id,
            listing_title,
            average,
            count,
            ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(score: i32) -> Rating {
        Rating {
            rating_id: RatingId::new(),
            listing_id: ListingId::new(),
            guest_id: UserId::new(),
            guest_name: "guest".into(),
            score,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let listing_id = ListingId::new();
        let summary = RatingSummary::from_ratings(
            listing_id,
            "Loft".into(),
            vec![rating(4), rating(5)],
        );
        assert_eq!(summary.average, 4.5);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn empty_ledger_yields_zero_average_not_error() {
        let summary = RatingSummary::from_ratings(ListingId::new(), "Loft".into(), vec![]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
        assert!(summary.ratings.is_empty());
    }

    #[test]
    fn single_rating_average_equals_its_score() {
        let summary =
            RatingSummary::from_ratings(ListingId::new(), "Loft".into(), vec![rating(3)]);
        assert_eq!(summary.average, 3.0);
        assert_eq!(summary.count, 1);
    }
}
