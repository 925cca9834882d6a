use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ListingId, RatingId},
    rating::{event::CreateRating, Rating},
};
use kernel::repository::rating::RatingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::rating::RatingRow, ConnectionPool};

#[derive(new)]
pub struct RatingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn create(&self, event: CreateRating) -> AppResult<RatingId> {
        let rating_id = RatingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO ratings (rating_id, listing_id, guest_id, score, comment)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(rating_id)
        .bind(event.listing_id)
        .bind(event.guest_id)
        .bind(event.score)
        .bind(&event.comment)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no rating record has been created".into(),
            ));
        }

        Ok(rating_id)
    }

    async fn find_by_listing(&self, listing_id: ListingId) -> AppResult<Vec<Rating>> {
        let rows: Vec<RatingRow> = sqlx::query_as(
            r#"
                SELECT
                    r.rating_id,
                    r.listing_id,
                    r.guest_id,
                    u.user_name AS guest_name,
                    r.score,
                    r.comment,
                    r.created_at
                FROM ratings AS r
                INNER JOIN users AS u ON r.guest_id = u.user_id
                WHERE r.listing_id = $1
                ORDER BY r.created_at DESC
            "#,
        )
        .bind(listing_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Rating::from).collect())
    }
}
