use axum::{Router, http::Uri, routing::get};

use crate::{error::AppError, state::AppState};

pub mod chats;
pub mod doc;
pub mod drinks;
pub mod health;
pub mod orders;
pub mod users;

// Resource routes without bound state; it is provided by `create_router`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(drinks::router())
        .merge(users::router())
        .merge(orders::router())
        .merge(chats::router())
}

/// Full application router: resources, health, docs, and the JSON 404 fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound
}
