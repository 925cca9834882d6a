use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::auth::event::CreateToken;
use kernel::model::user::event::CreateUser;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        auth::{AccessTokenResponse, LoginRequest, RegisterRequest},
        user::UserResponse,
    },
};

pub async fn register(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    let event = CreateUser::new(req.user_name, req.email, req.password);
    let user = registry.user_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;

    Ok(Json(AccessTokenResponse {
        user_id,
        access_token: access_token.0,
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}
