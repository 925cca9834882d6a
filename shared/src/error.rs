use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("forbidden operation")]
    ForbiddenOperation,
}

pub type AppResult<T> = Result<T, AppError>;

// A body that fails to parse is a caller error and gets the same
// `{error, message}` envelope as every other rejection.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(value: axum::extract::rejection::JsonRejection) -> Self {
        AppError::UnprocessableEntity(value.body_text())
    }
}

impl AppError {
    /// Machine-readable error kind carried next to the human message.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_)
            | AppError::ConversionEntityError(_) => "invalid_argument",
            AppError::EntityNotFound(_) => "not_found",
            AppError::UnauthenticatedError => "unauthenticated",
            AppError::ForbiddenOperation => "forbidden",
            _ => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_)
            | AppError::ConversionEntityError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "request rejected"
            );
        }
        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status_code, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_401() {
        assert_eq!(
            AppError::UnauthenticatedError.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn forbidden_maps_to_403() {
        assert_eq!(
            AppError::ForbiddenOperation.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn missing_entity_maps_to_404() {
        let err = AppError::EntityNotFound("booking not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn invalid_argument_maps_to_400() {
        let err = AppError::UnprocessableEntity("check-out must be after check-in".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "invalid_argument");
    }
}
