use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_host: bool,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            user_name,
            email,
            is_host,
        } = value;
        User {
            user_id,
            user_name,
            email,
            is_host,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct CredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
