use chrono::NaiveDate;

pub use mart_core::identity::Role;

/// Registered user account. `password_hash` is an Argon2id PHC string,
/// never the raw password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Fields for creating a user, or for the full-field replacement done by
/// the update endpoint.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Stocked inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub threshold: i32,
}

#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub threshold: i32,
}

/// Placed order. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub inventory_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub inventory_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDate,
}

/// Notification delivered to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i32,
    pub message: String,
    pub status: String,
}
