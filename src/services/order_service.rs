use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    entity::{
        Drinks, Users,
        orders::{ActiveModel, Column, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::Order,
    state::AppState,
};

pub const INVALID_REFERENCE: &str = "Invalid drink or user ID";

pub async fn list_orders(state: &AppState) -> AppResult<OrderList> {
    let items = Orders::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    Ok(OrderList { items })
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    let drink = Drinks::find_by_id(payload.drink_id).one(&state.orm).await?;
    let user = Users::find_by_id(payload.user_id).one(&state.orm).await?;
    if drink.is_none() || user.is_none() {
        tracing::warn!(
            drink_id = payload.drink_id,
            user_id = payload.user_id,
            "order rejected: unknown drink or user"
        );
        return Err(AppError::BadRequest(INVALID_REFERENCE.to_string()));
    }

    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let order = ActiveModel {
        id: NotSet,
        user_id: Set(payload.user_id),
        drink_id: Set(payload.drink_id),
        quantity: Set(payload.quantity),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match AppError::from(err) {
        AppError::BadRequest(_) => AppError::BadRequest(INVALID_REFERENCE.to_string()),
        other => other,
    })?;

    tracing::info!(
        order_id = order.id,
        user_id = order.user_id,
        drink_id = order.drink_id,
        quantity = order.quantity,
        "order created"
    );
    Ok(Order::from(order))
}
