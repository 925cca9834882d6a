use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::geography::Municipality;

#[async_trait]
pub trait GeographyRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Municipality>>;
    async fn find_all(&self) -> AppResult<Vec<Municipality>>;
}
