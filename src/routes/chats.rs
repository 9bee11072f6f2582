use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::chats::{ChatList, CreateChatRequest},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    models::Chat,
    services::chat_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/chats", get(list_chats).post(create_chat))
}

#[utoipa::path(
    get,
    path = "/chats",
    responses(
        (status = 200, description = "All chat messages", body = Vec<Chat>)
    ),
    tag = "Chats"
)]
pub async fn list_chats(State(state): State<AppState>) -> AppResult<Json<ChatList>> {
    let resp = chat_service::list_chats(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/chats",
    request_body = CreateChatRequest,
    responses(
        (status = 200, description = "Created chat message", body = Chat),
        (status = 400, description = "Unknown user or unparseable timestamp", body = ErrorBody),
    ),
    tag = "Chats"
)]
pub async fn create_chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateChatRequest>,
) -> AppResult<Json<Chat>> {
    let chat = chat_service::create_chat(&state, payload).await?;
    Ok(Json(chat))
}
