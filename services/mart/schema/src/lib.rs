pub mod inventory;
pub mod notifications;
pub mod orders;
pub mod users;
