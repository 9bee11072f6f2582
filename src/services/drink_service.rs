use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::drinks::{CreateDrinkRequest, DrinkList},
    entity::drinks::{ActiveModel, Column, Entity as Drinks},
    error::{AppError, AppResult},
    models::Drink,
    state::AppState,
};

pub async fn list_drinks(state: &AppState) -> AppResult<DrinkList> {
    let items = Drinks::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Drink::from)
        .collect();

    Ok(DrinkList { items })
}

pub async fn create_drink(state: &AppState, payload: CreateDrinkRequest) -> AppResult<Drink> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }

    let drink = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        image: Set(payload.image),
        category: Set(payload.category),
        price: Set(payload.price),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(drink_id = drink.id, name = %drink.name, "drink created");
    Ok(Drink::from(drink))
}
