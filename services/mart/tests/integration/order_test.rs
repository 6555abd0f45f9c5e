use chrono::NaiveDate;

use mart::domain::types::{NewInventoryItem, NewNotification, NewOrder, Role};
use mart::error::MartServiceError;
use mart::usecase::inventory::CreateInventoryUseCase;
use mart::usecase::notification::CreateNotificationUseCase;
use mart::usecase::order::{GetOrderUseCase, ListOrdersUseCase, PlaceOrderUseCase};
use mart::usecase::user::{SignupInput, SignupUseCase};
use mart_core::pagination::PageRequest;

use crate::helpers::InMemoryStore;

async fn seed_user(store: &InMemoryStore) -> i32 {
    SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(SignupInput {
        name: "alice".into(),
        email: "alice@example.com".into(),
        password: "hunter2".into(),
        role: Role::User,
    })
    .await
    .unwrap()
    .id
}

async fn seed_widget(store: &InMemoryStore, quantity: i32) -> i32 {
    CreateInventoryUseCase {
        repo: store.inventory_repo(),
    }
    .execute(NewInventoryItem {
        name: "Widget".into(),
        category: "tools".into(),
        quantity,
        threshold: 2,
    })
    .await
    .unwrap()
    .id
}

fn place_order(store: &InMemoryStore) -> PlaceOrderUseCase<
    crate::helpers::InMemoryUserRepo,
    crate::helpers::InMemoryInventoryRepo,
    crate::helpers::InMemoryOrderRepo,
> {
    PlaceOrderUseCase {
        users: store.user_repo(),
        inventory: store.inventory_repo(),
        orders: store.order_repo(),
    }
}

fn order(user_id: i32, inventory_id: i32, quantity: i32) -> NewOrder {
    NewOrder {
        user_id,
        inventory_id,
        quantity,
        order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

#[tokio::test]
async fn order_placement_decrements_stock_then_rejects_over_demand() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;
    let inventory_id = seed_widget(&store, 10).await;
    assert_eq!(inventory_id, 1);

    // quantity 10 → order 3 → stock 7
    let placed = place_order(&store)
        .execute(order(user_id, inventory_id, 3))
        .await
        .unwrap();
    assert_eq!(placed.quantity, 3);
    assert_eq!(store.stock_of(inventory_id), 7);

    // order 10 against stock 7 → fails, stock unchanged
    let result = place_order(&store)
        .execute(order(user_id, inventory_id, 10))
        .await;
    assert!(matches!(result, Err(MartServiceError::InsufficientStock)));
    assert_eq!(store.stock_of(inventory_id), 7);
    assert_eq!(store.orders.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn order_for_missing_user_creates_no_rows() {
    let store = InMemoryStore::new();
    let inventory_id = seed_widget(&store, 10).await;

    let result = place_order(&store).execute(order(99, inventory_id, 3)).await;
    assert!(matches!(result, Err(MartServiceError::UserNotFound)));
    assert!(store.orders.lock().unwrap().is_empty());
    assert_eq!(store.stock_of(inventory_id), 10);
}

#[tokio::test]
async fn order_for_missing_inventory_creates_no_rows() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;

    let result = place_order(&store).execute(order(user_id, 99, 3)).await;
    assert!(matches!(result, Err(MartServiceError::InventoryNotFound)));
    assert!(store.orders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn placed_order_is_readable_by_id_and_in_the_list() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;
    let inventory_id = seed_widget(&store, 10).await;

    let placed = place_order(&store)
        .execute(order(user_id, inventory_id, 3))
        .await
        .unwrap();

    let fetched = GetOrderUseCase {
        repo: store.order_repo(),
    }
    .execute(placed.id)
    .await
    .unwrap();
    assert_eq!(fetched, placed);

    let listed = ListOrdersUseCase {
        repo: store.order_repo(),
    }
    .execute(PageRequest::default())
    .await
    .unwrap();
    assert_eq!(listed, vec![placed]);
}

#[tokio::test]
async fn notification_requires_existing_user() {
    let store = InMemoryStore::new();
    let user_id = seed_user(&store).await;

    let usecase = CreateNotificationUseCase {
        users: store.user_repo(),
        notifications: store.notification_repo(),
    };
    let created = usecase
        .execute(NewNotification {
            user_id,
            message: "Widget stock below threshold".into(),
            status: "unread".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.user_id, user_id);

    let result = usecase
        .execute(NewNotification {
            user_id: 99,
            message: "orphan".into(),
            status: "unread".into(),
        })
        .await;
    assert!(matches!(result, Err(MartServiceError::UserNotFound)));
    assert_eq!(store.notifications.lock().unwrap().len(), 1);
}
