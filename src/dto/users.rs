use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UserList {
    pub items: Vec<User>,
}
