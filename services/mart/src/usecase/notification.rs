use mart_core::pagination::PageRequest;

use crate::domain::repository::{NotificationRepository, UserRepository};
use crate::domain::types::{NewNotification, Notification};
use crate::error::MartServiceError;

// ── CreateNotification ───────────────────────────────────────────────────────

/// Notification creation validates the referenced user first; the foreign key
/// backs this up at commit time.
pub struct CreateNotificationUseCase<U: UserRepository, N: NotificationRepository> {
    pub users: U,
    pub notifications: N,
}

impl<U: UserRepository, N: NotificationRepository> CreateNotificationUseCase<U, N> {
    pub async fn execute(&self, input: NewNotification) -> Result<Notification, MartServiceError> {
        self.users
            .find_by_id(input.user_id)
            .await?
            .ok_or(MartServiceError::UserNotFound)?;
        self.notifications.create(&input).await
    }
}

// ── GetNotification ──────────────────────────────────────────────────────────

pub struct GetNotificationUseCase<N: NotificationRepository> {
    pub repo: N,
}

impl<N: NotificationRepository> GetNotificationUseCase<N> {
    pub async fn execute(&self, notification_id: i32) -> Result<Notification, MartServiceError> {
        self.repo
            .find_by_id(notification_id)
            .await?
            .ok_or(MartServiceError::NotificationNotFound)
    }
}

// ── ListNotifications ────────────────────────────────────────────────────────

pub struct ListNotificationsUseCase<N: NotificationRepository> {
    pub repo: N,
}

impl<N: NotificationRepository> ListNotificationsUseCase<N> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Notification>, MartServiceError> {
        self.repo.list(page.clamped()).await
    }
}
