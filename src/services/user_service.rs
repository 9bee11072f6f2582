use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::users::{CreateUserRequest, UserList},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

pub const EMAIL_TAKEN: &str = "Email is already taken";

pub async fn list_users(state: &AppState) -> AppResult<UserList> {
    let items = Users::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(UserList { items })
}

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    let CreateUserRequest {
        email,
        password,
        profile,
    } = payload;

    if email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("password is required".to_string()));
    }

    let exist = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let password_hash = hash_password(&password)?;

    // A concurrent insert can still win the race; the unique index reports it.
    let user = ActiveModel {
        id: NotSet,
        email: Set(email),
        password: Set(password_hash),
        profile: Set(Some(profile.unwrap_or_default())),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict(EMAIL_TAKEN.to_string()),
        other => other,
    })?;

    tracing::info!(user_id = user.id, "user created");
    Ok(User::from(user))
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}
