use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mart_core::pagination::PageRequest;

use crate::domain::types::{NewNotification, Notification};
use crate::error::MartServiceError;
use crate::state::AppState;
use crate::usecase::notification::{
    CreateNotificationUseCase, GetNotificationUseCase, ListNotificationsUseCase,
};

#[derive(Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: i32,
    pub message: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct NotificationResponse {
    pub notification_id: i32,
    pub user_id: i32,
    pub message: String,
    pub status: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            notification_id: notification.id,
            user_id: notification.user_id,
            message: notification.message,
            status: notification.status,
        }
    }
}

// ── POST /notification ───────────────────────────────────────────────────────

pub async fn create_notification(
    State(state): State<AppState>,
    Json(body): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), MartServiceError> {
    let usecase = CreateNotificationUseCase {
        users: state.user_repo(),
        notifications: state.notification_repo(),
    };
    let notification = usecase
        .execute(NewNotification {
            user_id: body.user_id,
            message: body.message,
            status: body.status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(notification.into())))
}

// ── GET /notification ────────────────────────────────────────────────────────

pub async fn list_notifications(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<NotificationResponse>>, MartServiceError> {
    let usecase = ListNotificationsUseCase {
        repo: state.notification_repo(),
    };
    let notifications = usecase.execute(page).await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

// ── GET /notification/{id} ───────────────────────────────────────────────────

pub async fn get_notification(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
) -> Result<Json<NotificationResponse>, MartServiceError> {
    let usecase = GetNotificationUseCase {
        repo: state.notification_repo(),
    };
    let notification = usecase.execute(notification_id).await?;
    Ok(Json(notification.into()))
}
