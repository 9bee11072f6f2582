use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    datetime::{now_utc, parse_iso8601},
    dto::chats::{ChatList, CreateChatRequest},
    entity::{
        Users,
        chats::{ActiveModel, Column, Entity as Chats},
    },
    error::{AppError, AppResult},
    models::Chat,
    state::AppState,
};

pub const INVALID_USER: &str = "Invalid user ID";

pub async fn list_chats(state: &AppState) -> AppResult<ChatList> {
    let items = Chats::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Chat::from)
        .collect();

    Ok(ChatList { items })
}

pub async fn create_chat(state: &AppState, payload: CreateChatRequest) -> AppResult<Chat> {
    let timestamp = match payload.timestamp.as_deref() {
        Some(raw) => parse_iso8601(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid timestamp '{raw}', expected ISO-8601"))
        })?,
        None => now_utc(),
    };

    let user = Users::find_by_id(payload.user_id).one(&state.orm).await?;
    if user.is_none() {
        tracing::warn!(user_id = payload.user_id, "chat rejected: unknown user");
        return Err(AppError::BadRequest(INVALID_USER.to_string()));
    }

    let chat = ActiveModel {
        id: NotSet,
        user_id: Set(payload.user_id),
        message: Set(payload.message),
        timestamp: Set(timestamp),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match AppError::from(err) {
        AppError::BadRequest(_) => AppError::BadRequest(INVALID_USER.to_string()),
        other => other,
    })?;

    tracing::info!(chat_id = chat.id, user_id = chat.user_id, "chat created");
    Ok(Chat::from(chat))
}
