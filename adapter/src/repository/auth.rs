use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::{
    database::{model::user::CredentialRow, ConnectionPool},
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};

pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

impl AuthRepositoryImpl {
    pub fn new(db: ConnectionPool, kv: Arc<RedisClient>, ttl: u64) -> Self {
        Self { db, kv, ttl }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.clone().into();
        self.kv
            .get(&key)
            .await
            .map(|value| value.map(|id| id.0))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = Uuid::new_v4().simple().to_string();
        let key = AuthorizationKey(token.clone());
        self.kv
            .set_ex(&key, &AuthorizedUserId(event.user_id), self.ttl)
            .await?;
        Ok(AccessToken(token))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

struct AuthorizationKey(String);
struct AuthorizedUserId(UserId);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(value: AccessToken) -> Self {
        Self(value.0)
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::from_str(&value)
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}
