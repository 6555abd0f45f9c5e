use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionError, TransactionTrait,
    sea_query::{Expr, ExprTrait},
};

use mart_core::pagination::PageRequest;
use mart_schema::{inventory, notifications, orders, users};

use crate::domain::repository::{
    InventoryRepository, NotificationRepository, OrderRepository, UserRepository,
};
use crate::domain::types::{
    InventoryItem, NewInventoryItem, NewNotification, NewOrder, NewUser, Notification, Order, Role,
    User,
};
use crate::error::MartServiceError;

/// Map a sea-orm error, folding unique/foreign-key constraint failures into
/// `IntegrityViolation` and wrapping everything else as internal.
fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> MartServiceError {
    move |e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => MartServiceError::IntegrityViolation,
        _ => MartServiceError::Internal(anyhow::Error::new(e).context(context)),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MartServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MartServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, MartServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn create(&self, user: &NewUser) -> Result<User, MartServiceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create user"))?;
        user_from_model(model)
    }

    async fn replace(&self, id: i32, user: &NewUser) -> Result<Option<User>, MartServiceError> {
        let existing = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for replace")?;
        if existing.is_none() {
            return Ok(None);
        }
        let update = users::ActiveModel {
            id: Set(id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_str().to_owned()),
        }
        .update(&self.db)
        .await;
        match update {
            Ok(model) => user_from_model(model).map(Some),
            // Row deleted between the lookup and the update.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(db_err("replace user")(e)),
        }
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, MartServiceError> {
        let Some(model) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for delete")?
        else {
            return Ok(None);
        };
        // RESTRICT foreign keys: a user that still has orders or notifications
        // fails here with an integrity violation instead of leaving dangling
        // references.
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete user"))?;
        user_from_model(model).map(Some)
    }
}

fn user_from_model(model: users::Model) -> Result<User, MartServiceError> {
    let role = model
        .role
        .parse::<Role>()
        .map_err(|()| MartServiceError::Internal(anyhow::anyhow!("unknown role {:?}", model.role)))?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
    })
}

// ── Inventory repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInventoryRepository {
    pub db: DatabaseConnection,
}

impl InventoryRepository for DbInventoryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError> {
        let model = inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find inventory item by id")?;
        Ok(model.map(inventory_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<InventoryItem>, MartServiceError> {
        let models = inventory::Entity::find()
            .order_by_asc(inventory::Column::Id)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list inventory")?;
        Ok(models.into_iter().map(inventory_from_model).collect())
    }

    async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, MartServiceError> {
        let model = inventory::ActiveModel {
            name: Set(item.name.clone()),
            category: Set(item.category.clone()),
            quantity: Set(item.quantity),
            threshold: Set(item.threshold),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create inventory item"))?;
        Ok(inventory_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<Option<InventoryItem>, MartServiceError> {
        let Some(model) = inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find inventory item for delete")?
        else {
            return Ok(None);
        };
        inventory::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete inventory item"))?;
        Ok(Some(inventory_from_model(model)))
    }
}

fn inventory_from_model(model: inventory::Model) -> InventoryItem {
    InventoryItem {
        id: model.id,
        name: model.name,
        category: model.category,
        quantity: model.quantity,
        threshold: model.threshold,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, MartServiceError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Order>, MartServiceError> {
        let models = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn place(&self, order: &NewOrder) -> Result<Order, MartServiceError> {
        let order = order.clone();
        let result = self
            .db
            .transaction::<_, orders::Model, MartServiceError>(|txn| {
                Box::pin(async move {
                    // Conditional decrement: matches only while enough stock
                    // remains, so the quantity column never goes negative.
                    let updated = inventory::Entity::update_many()
                        .col_expr(
                            inventory::Column::Quantity,
                            Expr::col(inventory::Column::Quantity).sub(order.quantity),
                        )
                        .filter(inventory::Column::Id.eq(order.inventory_id))
                        .filter(inventory::Column::Quantity.gte(order.quantity))
                        .exec(txn)
                        .await
                        .map_err(db_err("decrement inventory quantity"))?;
                    if updated.rows_affected == 0 {
                        return Err(MartServiceError::InsufficientStock);
                    }
                    orders::ActiveModel {
                        user_id: Set(order.user_id),
                        inventory_id: Set(order.inventory_id),
                        quantity: Set(order.quantity),
                        order_date: Set(order.order_date),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(db_err("insert order"))
                })
            })
            .await;
        match result {
            Ok(model) => Ok(order_from_model(model)),
            Err(TransactionError::Connection(e)) => Err(MartServiceError::Internal(
                anyhow::Error::new(e).context("place order transaction"),
            )),
            Err(TransactionError::Transaction(e)) => Err(e),
        }
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        inventory_id: model.inventory_id,
        quantity: model.quantity,
        order_date: model.order_date,
    }
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, MartServiceError> {
        let model = notifications::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find notification by id")?;
        Ok(model.map(notification_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Notification>, MartServiceError> {
        let models = notifications::Entity::find()
            .order_by_asc(notifications::Column::Id)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list notifications")?;
        Ok(models.into_iter().map(notification_from_model).collect())
    }

    async fn create(
        &self,
        notification: &NewNotification,
    ) -> Result<Notification, MartServiceError> {
        let model = notifications::ActiveModel {
            user_id: Set(notification.user_id),
            message: Set(notification.message.clone()),
            status: Set(notification.status.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create notification"))?;
        Ok(notification_from_model(model))
    }
}

fn notification_from_model(model: notifications::Model) -> Notification {
    Notification {
        id: model.id,
        user_id: model.user_id,
        message: model.message,
        status: model.status,
    }
}
