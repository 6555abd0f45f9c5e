use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use mart_core::health::{healthz, readyz};
use mart_core::middleware::request_id_layer;

use crate::handlers::{
    inventory::{create_inventory, delete_inventory, get_inventory, list_inventory},
    notification::{create_notification, get_notification, list_notifications},
    order::{create_order, get_order, list_orders},
    user::{delete_user, get_user, list_users, login, signup, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Inventory
        .route("/inventory", post(create_inventory))
        .route("/inventory", get(list_inventory))
        .route("/inventory/{id}", get(get_inventory))
        .route("/inventory/{id}", delete(delete_inventory))
        // Orders
        .route("/order", post(create_order))
        .route("/order", get(list_orders))
        .route("/order/{id}", get(get_order))
        // Notifications
        .route("/notification", post(create_notification))
        .route("/notification", get(list_notifications))
        .route("/notification/{id}", get(get_notification))
        // Users
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user", get(list_users))
        .route("/user/{id}", get(get_user))
        .route("/user/{id}", put(update_user))
        .route("/user/{id}", delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
