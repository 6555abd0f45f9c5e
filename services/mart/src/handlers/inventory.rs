use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mart_core::identity::Identity;
use mart_core::pagination::PageRequest;

use crate::domain::types::{InventoryItem, NewInventoryItem};
use crate::error::MartServiceError;
use crate::state::AppState;
use crate::usecase::inventory::{
    CreateInventoryUseCase, DeleteInventoryUseCase, GetInventoryUseCase, ListInventoryUseCase,
};

#[derive(Deserialize)]
pub struct CreateInventoryRequest {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub threshold: i32,
}

#[derive(Serialize)]
pub struct InventoryResponse {
    pub inventory_id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub threshold: i32,
}

impl From<InventoryItem> for InventoryResponse {
    fn from(item: InventoryItem) -> Self {
        Self {
            inventory_id: item.id,
            name: item.name,
            category: item.category,
            quantity: item.quantity,
            threshold: item.threshold,
        }
    }
}

// ── POST /inventory ──────────────────────────────────────────────────────────

pub async fn create_inventory(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateInventoryRequest>,
) -> Result<(StatusCode, Json<InventoryResponse>), MartServiceError> {
    if !identity.role.is_admin() {
        return Err(MartServiceError::Forbidden);
    }
    let usecase = CreateInventoryUseCase {
        repo: state.inventory_repo(),
    };
    let item = usecase
        .execute(NewInventoryItem {
            name: body.name,
            category: body.category,
            quantity: body.quantity,
            threshold: body.threshold,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

// ── GET /inventory ───────────────────────────────────────────────────────────

pub async fn list_inventory(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<InventoryResponse>>, MartServiceError> {
    let usecase = ListInventoryUseCase {
        repo: state.inventory_repo(),
    };
    let items = usecase.execute(page).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /inventory/{id} ──────────────────────────────────────────────────────

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(inventory_id): Path<i32>,
) -> Result<Json<InventoryResponse>, MartServiceError> {
    let usecase = GetInventoryUseCase {
        repo: state.inventory_repo(),
    };
    let item = usecase.execute(inventory_id).await?;
    Ok(Json(item.into()))
}

// ── DELETE /inventory/{id} ───────────────────────────────────────────────────

pub async fn delete_inventory(
    identity: Identity,
    State(state): State<AppState>,
    Path(inventory_id): Path<i32>,
) -> Result<Json<InventoryResponse>, MartServiceError> {
    if !identity.role.is_admin() {
        return Err(MartServiceError::Forbidden);
    }
    let usecase = DeleteInventoryUseCase {
        repo: state.inventory_repo(),
    };
    let deleted = usecase.execute(inventory_id).await?;
    Ok(Json(deleted.into()))
}
