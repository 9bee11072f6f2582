use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        chats::CreateChatRequest, drinks::CreateDrinkRequest, orders::CreateOrderRequest,
        users::CreateUserRequest,
    },
    error::ErrorBody,
    models::{Chat, Drink, Order, User},
    routes::{chats, drinks, health, orders, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        drinks::list_drinks,
        drinks::create_drink,
        users::list_users,
        users::create_user,
        orders::list_orders,
        orders::create_order,
        chats::list_chats,
        chats::create_chat
    ),
    components(
        schemas(
            Drink,
            User,
            Order,
            Chat,
            CreateDrinkRequest,
            CreateUserRequest,
            CreateOrderRequest,
            CreateChatRequest,
            ErrorBody,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Drinks", description = "Drink menu endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Chats", description = "Chat endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
