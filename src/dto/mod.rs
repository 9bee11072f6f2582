pub mod chats;
pub mod drinks;
pub mod orders;
pub mod users;
