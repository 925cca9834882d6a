use kernel::model::{id::UserId, user::User};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_host: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            is_host,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            is_host,
        }
    }
}
