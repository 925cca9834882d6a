use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ListingId, UserId},
    listing::{event::CreateListing, Listing},
};
use kernel::repository::listing::ListingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::listing::ListingRow, ConnectionPool};

const LISTING_VIEW_SELECT: &str = r#"
    SELECT
        l.listing_id,
        l.title,
        l.description,
        l.location_desc,
        l.price_per_night,
        l.bedrooms,
        l.bathrooms,
        l.max_guests,
        l.municipality_id,
        m.name AS municipality_name,
        l.owned_by,
        u.user_name AS owner_name
    FROM listings AS l
    INNER JOIN municipalities AS m ON l.municipality_id = m.municipality_id
    INNER JOIN users AS u ON l.owned_by = u.user_id
"#;

#[derive(new)]
pub struct ListingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ListingRepository for ListingRepositoryImpl {
    async fn create(&self, event: CreateListing) -> AppResult<ListingId> {
        let mut tx = self.db.begin().await?;

        let listing_id = ListingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO listings
                (listing_id, title, description, location_desc, price_per_night,
                 bedrooms, bathrooms, max_guests, municipality_id, owned_by)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(listing_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location_desc)
        .bind(event.price_per_night)
        .bind(event.bedrooms)
        .bind(event.bathrooms)
        .bind(event.max_guests)
        .bind(event.municipality_id)
        .bind(event.owned_by)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no listing record has been created".into(),
            ));
        }

        // Publishing the first listing makes the user a host.
        sqlx::query("UPDATE users SET is_host = TRUE WHERE user_id = $1")
            .bind(event.owned_by)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(listing_id)
    }

    async fn find_by_id(&self, listing_id: ListingId) -> AppResult<Option<Listing>> {
        let row: Option<ListingRow> =
            sqlx::query_as(&format!("{LISTING_VIEW_SELECT} WHERE l.listing_id = $1"))
                .bind(listing_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Listing::from))
    }

    async fn find_all(&self, municipality: Option<String>) -> AppResult<Vec<Listing>> {
        // An unknown municipality name matches nothing and yields an empty
        // collection rather than an error.
        let rows: Vec<ListingRow> = match municipality {
            Some(name) => {
                sqlx::query_as(&format!(
                    "{LISTING_VIEW_SELECT} WHERE m.name = $1 ORDER BY l.created_at DESC"
                ))
                .bind(name)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(&format!("{LISTING_VIEW_SELECT} ORDER BY l.created_at DESC"))
                    .fetch_all(self.db.inner_ref())
                    .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Listing>> {
        let rows: Vec<ListingRow> = sqlx::query_as(&format!(
            "{LISTING_VIEW_SELECT} WHERE l.owned_by = $1 ORDER BY l.created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }
}
