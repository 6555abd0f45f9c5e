use std::sync::{Arc, Mutex};

use mart::domain::repository::{
    InventoryRepository, NotificationRepository, OrderRepository, UserRepository,
};
use mart::domain::types::{
    InventoryItem, NewInventoryItem, NewNotification, NewOrder, NewUser, Notification, Order, User,
};
use mart::error::MartServiceError;
use mart_core::pagination::PageRequest;

/// Shared in-memory store standing in for the database. Orders and inventory
/// share it so the conditional-decrement rule of order placement can be
/// exercised against real stock levels.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub users: Arc<Mutex<Vec<User>>>,
    pub inventory: Arc<Mutex<Vec<InventoryItem>>>,
    pub orders: Arc<Mutex<Vec<Order>>>,
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(&self) -> InMemoryUserRepo {
        InMemoryUserRepo {
            store: self.clone(),
        }
    }

    pub fn inventory_repo(&self) -> InMemoryInventoryRepo {
        InMemoryInventoryRepo {
            store: self.clone(),
        }
    }

    pub fn order_repo(&self) -> InMemoryOrderRepo {
        InMemoryOrderRepo {
            store: self.clone(),
        }
    }

    pub fn notification_repo(&self) -> InMemoryNotificationRepo {
        InMemoryNotificationRepo {
            store: self.clone(),
        }
    }

    pub fn stock_of(&self, inventory_id: i32) -> i32 {
        self.inventory
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == inventory_id)
            .map(|i| i.quantity)
            .expect("inventory item")
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepo {
    store: InMemoryStore,
}

impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MartServiceError> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MartServiceError> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<User>, MartServiceError> {
        Ok(self.store.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &NewUser) -> Result<User, MartServiceError> {
        let mut users = self.store.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(MartServiceError::IntegrityViolation);
        }
        let created = User {
            id: users.len() as i32 + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: i32, user: &NewUser) -> Result<Option<User>, MartServiceError> {
        let mut users = self.store.users.lock().unwrap();
        let Some(existing) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        *existing = User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
        };
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, MartServiceError> {
        // Restrict foreign keys: refuse while orders or notifications still
        // reference the user.
        let referenced = self.store.orders.lock().unwrap().iter().any(|o| o.user_id == id)
            || self
                .store
                .notifications
                .lock()
                .unwrap()
                .iter()
                .any(|n| n.user_id == id);
        let mut users = self.store.users.lock().unwrap();
        let Some(pos) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        if referenced {
            return Err(MartServiceError::IntegrityViolation);
        }
        Ok(Some(users.remove(pos)))
    }
}

#[derive(Clone)]
pub struct InMemoryInventoryRepo {
    store: InMemoryStore,
}

impl InventoryRepository for InMemoryInventoryRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError> {
        Ok(self
            .store
            .inventory
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<InventoryItem>, MartServiceError> {
        Ok(self.store.inventory.lock().unwrap().clone())
    }

    async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, MartServiceError> {
        let mut inventory = self.store.inventory.lock().unwrap();
        let created = InventoryItem {
            id: inventory.len() as i32 + 1,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            threshold: item.threshold,
        };
        inventory.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError> {
        let mut inventory = self.store.inventory.lock().unwrap();
        let Some(pos) = inventory.iter().position(|i| i.id == id) else {
            return Ok(None);
        };
        Ok(Some(inventory.remove(pos)))
    }
}

#[derive(Clone)]
pub struct InMemoryOrderRepo {
    store: InMemoryStore,
}

impl OrderRepository for InMemoryOrderRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, MartServiceError> {
        Ok(self
            .store
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Order>, MartServiceError> {
        Ok(self.store.orders.lock().unwrap().clone())
    }

    async fn place(&self, order: &NewOrder) -> Result<Order, MartServiceError> {
        // Same conditional-decrement rule as the database transaction: the
        // decrement only applies while enough stock remains, and nothing is
        // written on failure.
        let mut inventory = self.store.inventory.lock().unwrap();
        let Some(item) = inventory.iter_mut().find(|i| i.id == order.inventory_id) else {
            return Err(MartServiceError::InsufficientStock);
        };
        if item.quantity < order.quantity {
            return Err(MartServiceError::InsufficientStock);
        }
        item.quantity -= order.quantity;

        let mut orders = self.store.orders.lock().unwrap();
        let created = Order {
            id: orders.len() as i32 + 1,
            user_id: order.user_id,
            inventory_id: order.inventory_id,
            quantity: order.quantity,
            order_date: order.order_date,
        };
        orders.push(created.clone());
        Ok(created)
    }
}

#[derive(Clone)]
pub struct InMemoryNotificationRepo {
    store: InMemoryStore,
}

impl NotificationRepository for InMemoryNotificationRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, MartServiceError> {
        Ok(self
            .store
            .notifications
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Notification>, MartServiceError> {
        Ok(self.store.notifications.lock().unwrap().clone())
    }

    async fn create(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification, MartServiceError> {
        let mut notifications = self.store.notifications.lock().unwrap();
        let created = Notification {
            id: notifications.len() as i32 + 1,
            user_id: notification.user_id,
            message: notification.message.clone(),
            status: notification.status.clone(),
        };
        notifications.push(created.clone());
        Ok(created)
    }
}
