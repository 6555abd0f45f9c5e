use chrono::NaiveDate;

use mart::domain::types::{NewInventoryItem, NewOrder, Role};
use mart::error::MartServiceError;
use mart::usecase::inventory::CreateInventoryUseCase;
use mart::usecase::order::PlaceOrderUseCase;
use mart::usecase::user::{
    DeleteUserUseCase, LoginUseCase, SignupInput, SignupUseCase, UpdateUserUseCase,
};

use crate::helpers::InMemoryStore;

fn alice() -> SignupInput {
    SignupInput {
        name: "alice".into(),
        email: "alice@example.com".into(),
        password: "hunter2".into(),
        role: Role::User,
    }
}

#[tokio::test]
async fn signup_then_login_returns_same_user_id() {
    let store = InMemoryStore::new();
    let created = SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await
    .unwrap();

    let logged_in = LoginUseCase {
        repo: store.user_repo(),
    }
    .execute("alice@example.com", "hunter2")
    .await
    .unwrap();
    assert_eq!(logged_in.id, created.id);
    assert_eq!(logged_in.name, "alice");
    assert_eq!(logged_in.role, Role::User);
}

#[tokio::test]
async fn duplicate_email_signup_is_rejected() {
    let store = InMemoryStore::new();
    SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await
    .unwrap();

    let result = SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await;
    assert!(matches!(result, Err(MartServiceError::EmailTaken)));
    assert_eq!(store.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn update_replaces_all_fields_and_new_password_logs_in() {
    let store = InMemoryStore::new();
    let created = SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await
    .unwrap();

    UpdateUserUseCase {
        repo: store.user_repo(),
    }
    .execute(
        created.id,
        SignupInput {
            name: "alice the admin".into(),
            email: "admin@example.com".into(),
            password: "correct horse".into(),
            role: Role::Admin,
        },
    )
    .await
    .unwrap();

    let old_login = LoginUseCase {
        repo: store.user_repo(),
    }
    .execute("alice@example.com", "hunter2")
    .await;
    assert!(matches!(
        old_login,
        Err(MartServiceError::InvalidCredentials)
    ));

    let new_login = LoginUseCase {
        repo: store.user_repo(),
    }
    .execute("admin@example.com", "correct horse")
    .await
    .unwrap();
    assert_eq!(new_login.id, created.id);
    assert_eq!(new_login.role, Role::Admin);
}

#[tokio::test]
async fn deleting_a_user_with_orders_is_an_integrity_violation() {
    let store = InMemoryStore::new();
    let user = SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await
    .unwrap();
    let item = CreateInventoryUseCase {
        repo: store.inventory_repo(),
    }
    .execute(NewInventoryItem {
        name: "Widget".into(),
        category: "tools".into(),
        quantity: 10,
        threshold: 2,
    })
    .await
    .unwrap();
    PlaceOrderUseCase {
        users: store.user_repo(),
        inventory: store.inventory_repo(),
        orders: store.order_repo(),
    }
    .execute(NewOrder {
        user_id: user.id,
        inventory_id: item.id,
        quantity: 1,
        order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    })
    .await
    .unwrap();

    let result = DeleteUserUseCase {
        repo: store.user_repo(),
    }
    .execute(user.id)
    .await;
    assert!(matches!(
        result,
        Err(MartServiceError::IntegrityViolation)
    ));
    assert_eq!(store.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_an_unreferenced_user_returns_the_row() {
    let store = InMemoryStore::new();
    let user = SignupUseCase {
        repo: store.user_repo(),
    }
    .execute(alice())
    .await
    .unwrap();

    let deleted = DeleteUserUseCase {
        repo: store.user_repo(),
    }
    .execute(user.id)
    .await
    .unwrap();
    assert_eq!(deleted.id, user.id);
    assert!(store.users.lock().unwrap().is_empty());
}
