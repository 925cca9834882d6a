use async_trait::async_trait;
use derive_new::new;
use kernel::model::geography::Municipality;
use kernel::repository::geography::GeographyRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::geography::MunicipalityRow, ConnectionPool};

#[derive(new)]
pub struct GeographyRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GeographyRepository for GeographyRepositoryImpl {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Municipality>> {
        let row: Option<MunicipalityRow> = sqlx::query_as(
            r#"
                SELECT municipality_id, name, department, region
                FROM municipalities
                WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Municipality::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Municipality>> {
        let rows: Vec<MunicipalityRow> = sqlx::query_as(
            r#"
                SELECT municipality_id, name, department, region
                FROM municipalities
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Municipality::from).collect())
    }
}
