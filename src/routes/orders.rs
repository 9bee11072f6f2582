use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/orders", get(list_orders).post(create_order))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<OrderList>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Created order", body = Order),
        (status = 400, description = "Invalid drink or user ID", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(order))
}
