use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mart_core::pagination::PageRequest;

use crate::domain::types::{NewOrder, Order};
use crate::error::MartServiceError;
use crate::state::AppState;
use crate::usecase::order::{GetOrderUseCase, ListOrdersUseCase, PlaceOrderUseCase};

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: i32,
    pub inventory_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDate,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub order_id: i32,
    pub user_id: i32,
    pub inventory_id: i32,
    pub quantity: i32,
    pub order_date: NaiveDate,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            user_id: order.user_id,
            inventory_id: order.inventory_id,
            quantity: order.quantity,
            order_date: order.order_date,
        }
    }
}

// ── POST /order ──────────────────────────────────────────────────────────────

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), MartServiceError> {
    let usecase = PlaceOrderUseCase {
        users: state.user_repo(),
        inventory: state.inventory_repo(),
        orders: state.order_repo(),
    };
    let order = usecase
        .execute(NewOrder {
            user_id: body.user_id,
            inventory_id: body.inventory_id,
            quantity: body.quantity,
            order_date: body.order_date,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── GET /order ───────────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<OrderResponse>>, MartServiceError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(page).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// ── GET /order/{id} ──────────────────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<Json<OrderResponse>, MartServiceError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(order_id).await?;
    Ok(Json(order.into()))
}
