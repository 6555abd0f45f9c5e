use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Mart service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MartServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("inventory item not found")]
    InventoryNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("notification not found")]
    NotificationNotFound,
    #[error("insufficient inventory quantity")]
    InsufficientStock,
    #[error("order quantity must be positive")]
    InvalidQuantity,
    #[error("inventory quantity and threshold must not be negative")]
    InvalidStockLevel,
    #[error("email already registered")]
    EmailTaken,
    #[error("integrity violation")]
    IntegrityViolation,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MartServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InventoryNotFound => "INVENTORY_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::InsufficientStock => "INSUFFICIENT_STOCK",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InvalidStockLevel => "INVALID_STOCK_LEVEL",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::IntegrityViolation => "INTEGRITY_VIOLATION",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for MartServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::InventoryNotFound
            | Self::OrderNotFound
            | Self::NotificationNotFound => StatusCode::NOT_FOUND,
            Self::InsufficientStock
            | Self::InvalidQuantity
            | Self::InvalidStockLevel
            | Self::EmailTaken
            | Self::IntegrityViolation => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
