use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::drinks::{CreateDrinkRequest, DrinkList},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    models::Drink,
    services::drink_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/drinks", get(list_drinks).post(create_drink))
}

#[utoipa::path(
    get,
    path = "/drinks",
    responses(
        (status = 200, description = "All drinks", body = Vec<Drink>)
    ),
    tag = "Drinks"
)]
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<Json<DrinkList>> {
    let resp = drink_service::list_drinks(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/drinks",
    request_body = CreateDrinkRequest,
    responses(
        (status = 200, description = "Created drink", body = Drink),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
    ),
    tag = "Drinks"
)]
pub async fn create_drink(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateDrinkRequest>,
) -> AppResult<Json<Drink>> {
    let drink = drink_service::create_drink(&state, payload).await?;
    Ok(Json(drink))
}
