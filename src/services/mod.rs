pub mod chat_service;
pub mod drink_service;
pub mod order_service;
pub mod user_service;
