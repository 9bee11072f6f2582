pub mod chats;
pub mod drinks;
pub mod orders;
pub mod users;

pub use chats::Entity as Chats;
pub use drinks::Entity as Drinks;
pub use orders::Entity as Orders;
pub use users::Entity as Users;
