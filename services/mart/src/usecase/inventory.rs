use mart_core::pagination::PageRequest;

use crate::domain::repository::InventoryRepository;
use crate::domain::types::{InventoryItem, NewInventoryItem};
use crate::error::MartServiceError;

// ── CreateInventory ──────────────────────────────────────────────────────────

pub struct CreateInventoryUseCase<R: InventoryRepository> {
    pub repo: R,
}

impl<R: InventoryRepository> CreateInventoryUseCase<R> {
    pub async fn execute(&self, input: NewInventoryItem) -> Result<InventoryItem, MartServiceError> {
        if input.quantity < 0 || input.threshold < 0 {
            return Err(MartServiceError::InvalidStockLevel);
        }
        self.repo.create(&input).await
    }
}

// ── GetInventory ─────────────────────────────────────────────────────────────

pub struct GetInventoryUseCase<R: InventoryRepository> {
    pub repo: R,
}

impl<R: InventoryRepository> GetInventoryUseCase<R> {
    pub async fn execute(&self, inventory_id: i32) -> Result<InventoryItem, MartServiceError> {
        self.repo
            .find_by_id(inventory_id)
            .await?
            .ok_or(MartServiceError::InventoryNotFound)
    }
}

// ── ListInventory ────────────────────────────────────────────────────────────

pub struct ListInventoryUseCase<R: InventoryRepository> {
    pub repo: R,
}

impl<R: InventoryRepository> ListInventoryUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<InventoryItem>, MartServiceError> {
        self.repo.list(page.clamped()).await
    }
}

// ── DeleteInventory ──────────────────────────────────────────────────────────

pub struct DeleteInventoryUseCase<R: InventoryRepository> {
    pub repo: R,
}

impl<R: InventoryRepository> DeleteInventoryUseCase<R> {
    pub async fn execute(&self, inventory_id: i32) -> Result<InventoryItem, MartServiceError> {
        self.repo
            .delete(inventory_id)
            .await?
            .ok_or(MartServiceError::InventoryNotFound)
    }
}
