use db::models::user::Model as UserModel;
use serde::Serialize;

/// User representation returned to clients. The password hash never
/// appears here.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
