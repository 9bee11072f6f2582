use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: i32,
    pub drink_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct OrderList {
    pub items: Vec<Order>,
}
