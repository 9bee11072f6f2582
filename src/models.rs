use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{datetime::to_iso8601, entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Drink {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: f64,
}

/// Public view of a user. The stored password never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub drink_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Chat {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    /// ISO-8601, e.g. `2024-01-01T10:00:00`.
    pub timestamp: String,
}

impl From<entity::drinks::Model> for Drink {
    fn from(model: entity::drinks::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
            category: model.category,
            price: model.price,
        }
    }
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            profile: model.profile,
        }
    }
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            drink_id: model.drink_id,
            quantity: model.quantity,
        }
    }
}

impl From<entity::chats::Model> for Chat {
    fn from(model: entity::chats::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            message: model.message,
            timestamp: to_iso8601(&model.timestamp),
        }
    }
}
