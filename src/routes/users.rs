use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::users::{CreateUserRequest, UserList},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    models::User,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let resp = user_service::list_users(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
        (status = 409, description = "Email is already taken", body = ErrorBody),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> AppResult<Json<User>> {
    let user = user_service::create_user(&state, payload).await?;
    Ok(Json(user))
}
