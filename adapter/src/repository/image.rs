use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::ListingImageId, listing::event::StoreListingImage};
use kernel::repository::image::ListingImageRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct ListingImageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ListingImageRepository for ListingImageRepositoryImpl {
    async fn store(&self, event: StoreListingImage) -> AppResult<ListingImageId> {
        let image_id = ListingImageId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO listing_images (image_id, listing_id, filename, content_type, data)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(image_id)
        .bind(event.listing_id)
        .bind(&event.filename)
        .bind(&event.content_type)
        .bind(&event.data)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no listing image record has been created".into(),
            ));
        }

        Ok(image_id)
    }
}
