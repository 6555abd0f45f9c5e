#![allow(async_fn_in_trait)]

use mart_core::pagination::PageRequest;

use crate::domain::types::{
    InventoryItem, NewInventoryItem, NewNotification, NewOrder, NewUser, Notification, Order, User,
};
use crate::error::MartServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MartServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MartServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, MartServiceError>;
    async fn create(&self, user: &NewUser) -> Result<User, MartServiceError>;

    /// Replace every field of an existing user. Returns `None` if the row
    /// does not exist.
    async fn replace(&self, id: i32, user: &NewUser) -> Result<Option<User>, MartServiceError>;

    /// Delete a user. Returns the deleted row, or `None` if absent.
    async fn delete(&self, id: i32) -> Result<Option<User>, MartServiceError>;
}

/// Repository for inventory items.
pub trait InventoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<InventoryItem>, MartServiceError>;
    async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, MartServiceError>;

    /// Delete an inventory item. Returns the deleted row, or `None` if absent.
    async fn delete(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, MartServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<Order>, MartServiceError>;

    /// Atomically decrement the referenced inventory item's quantity and
    /// insert the order row, in one transaction.
    ///
    /// The decrement is conditional (`quantity >= ordered quantity`); when it
    /// matches no row the transaction rolls back with `InsufficientStock`, so
    /// stock never goes negative even under concurrent placements.
    async fn place(&self, order: &NewOrder) -> Result<Order, MartServiceError>;
}

/// Repository for notifications.
pub trait NotificationRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, MartServiceError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<Notification>, MartServiceError>;
    async fn create(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification, MartServiceError>;
}
