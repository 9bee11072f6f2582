use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Chat;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateChatRequest {
    pub user_id: i32,
    pub message: String,
    /// ISO-8601 date-time; the current UTC time is used when omitted.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ChatList {
    pub items: Vec<Chat>,
}
