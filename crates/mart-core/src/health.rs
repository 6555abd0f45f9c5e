use axum::http::StatusCode;

/// `GET /healthz` — process liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness. The service serves traffic as soon as startup
/// migrations finish, so this currently mirrors liveness.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
