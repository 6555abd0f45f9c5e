use mart_core::pagination::PageRequest;

use crate::domain::repository::{InventoryRepository, OrderRepository, UserRepository};
use crate::domain::types::{NewOrder, Order};
use crate::error::MartServiceError;

// ── PlaceOrder ───────────────────────────────────────────────────────────────

/// Order placement: validate the referenced user and inventory item, check
/// stock, then let the repository decrement stock and insert the order in one
/// transaction. On any failure path no row is created and stock is unchanged.
pub struct PlaceOrderUseCase<U: UserRepository, I: InventoryRepository, O: OrderRepository> {
    pub users: U,
    pub inventory: I,
    pub orders: O,
}

impl<U: UserRepository, I: InventoryRepository, O: OrderRepository> PlaceOrderUseCase<U, I, O> {
    pub async fn execute(&self, input: NewOrder) -> Result<Order, MartServiceError> {
        if input.quantity < 1 {
            return Err(MartServiceError::InvalidQuantity);
        }
        self.users
            .find_by_id(input.user_id)
            .await?
            .ok_or(MartServiceError::UserNotFound)?;
        let item = self
            .inventory
            .find_by_id(input.inventory_id)
            .await?
            .ok_or(MartServiceError::InventoryNotFound)?;
        // Early rejection for the common case; the conditional decrement in
        // `place` re-checks under the transaction, so a concurrent placement
        // that drains stock between here and the commit still fails cleanly.
        if item.quantity < input.quantity {
            return Err(MartServiceError::InsufficientStock);
        }
        self.orders.place(&input).await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<O: OrderRepository> {
    pub repo: O,
}

impl<O: OrderRepository> GetOrderUseCase<O> {
    pub async fn execute(&self, order_id: i32) -> Result<Order, MartServiceError> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or(MartServiceError::OrderNotFound)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<O: OrderRepository> {
    pub repo: O,
}

impl<O: OrderRepository> ListOrdersUseCase<O> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Order>, MartServiceError> {
        self.repo.list(page.clamped()).await
    }
}
